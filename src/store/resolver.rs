use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use super::client::{StoreError, TableStore, row_id};
use crate::core::EntityKind;

/// Row shape shared by `fornitori` and `clienti`.
#[derive(Debug, Serialize)]
struct PartyRow<'a> {
    id: &'a str,
    partita_iva: &'a str,
    denominazione: &'a str,
}

/// Find-or-create of suppliers and customers keyed by VAT number.
///
/// A plain check-then-insert races when two imports carry the same new VAT
/// number, so resolutions of the same (kind, key) are serialized through a
/// keyed lock; distinct keys proceed in parallel. The lock table grows with
/// the number of distinct keys seen by this process.
pub struct EntityResolver {
    store: Arc<TableStore>,
    locks: Mutex<HashMap<(EntityKind, String), Arc<AsyncMutex<()>>>>,
}

impl EntityResolver {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    fn lock_for(&self, kind: EntityKind, vat: &str) -> Arc<AsyncMutex<()>> {
        // Nothing in the guarded section can panic, so a poisoned table is
        // still consistent; recover rather than propagate the poison.
        let mut locks = self
            .locks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        locks
            .entry((kind, vat.to_string()))
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Identifier of the row whose `partita_iva` equals `vat`, inserting the
    /// row first if none exists. An existing row is returned unchanged —
    /// first write wins, attributes are never updated.
    ///
    /// # Errors
    ///
    /// `StoreError` on any remote read/write failure; nothing is cached and
    /// the caller aborts the whole attempt.
    pub async fn resolve_or_create(
        &self,
        kind: EntityKind,
        vat: &str,
        name: &str,
    ) -> Result<String, StoreError> {
        let key_lock = self.lock_for(kind, vat);
        let _guard = key_lock.lock().await;

        if let Some(row) = self.store.find_by(kind.table(), &[("partita_iva", vat)]).await? {
            return row_id(&row);
        }

        let id = Uuid::new_v4().to_string();
        self.store
            .insert(
                kind.table(),
                &PartyRow {
                    id: &id,
                    partita_iva: vat,
                    denominazione: name,
                },
            )
            .await?;
        tracing::info!(table = kind.table(), vat, id = %id, "created party row");
        Ok(id)
    }
}
