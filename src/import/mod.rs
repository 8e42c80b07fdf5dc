//! The import pipeline: extract, resolve parties, dedup, insert, log.
//!
//! One attempt is a linear async sequence with a fixed order — supplier
//! resolution precedes customer resolution precedes the dedup check precedes
//! the insert, because later steps consume identifiers produced by earlier
//! ones. Party rows created before a later failure or an ignored outcome
//! stay in the store; the pipeline never rolls back.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::core::{EntityKind, ImportError, ImportStatus};
use crate::extract::extract_invoice;
use crate::store::{EntityResolver, ImportLogRecorder, StoreConfig, StoreError, TableStore, row_id};

/// What one finished attempt produced. `status` is `Success` or `Ignored`;
/// failed attempts travel as `Err(ImportError)` instead.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub status: ImportStatus,
    pub message: String,
    pub invoice_id: Option<String>,
    pub supplier_id: Option<String>,
    pub customer_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct InvoiceRow<'a> {
    id: &'a str,
    numero: &'a str,
    data: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    importototale: Decimal,
    filename: &'a str,
    idfornitore: &'a str,
    codicecliente: &'a str,
}

/// Orchestrates one upload from raw bytes to a logged outcome.
pub struct Importer {
    store: Arc<TableStore>,
    resolver: EntityResolver,
    recorder: ImportLogRecorder,
}

impl Importer {
    /// # Errors
    ///
    /// `StoreError::Network` if the HTTP client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let store = Arc::new(TableStore::new(config)?);
        Ok(Self {
            resolver: EntityResolver::new(Arc::clone(&store)),
            recorder: ImportLogRecorder::new(Arc::clone(&store)),
            store,
        })
    }

    /// Run one attempt end to end. Every exit path — success, duplicate, or
    /// error — leaves an `import_log` row carrying whatever identifiers the
    /// attempt collected before it stopped.
    ///
    /// # Errors
    ///
    /// Document errors ([`ImportError::is_document_error`]) abort before any
    /// store write; [`ImportError::Persistence`] aborts at whatever stage the
    /// store failed.
    pub async fn import(&self, filename: &str, bytes: &[u8]) -> Result<ImportReport, ImportError> {
        let mut supplier_id = None;
        let mut customer_id = None;

        match self
            .run(filename, bytes, &mut supplier_id, &mut customer_id)
            .await
        {
            Ok(report) => {
                self.recorder
                    .record(
                        filename,
                        report.status,
                        &report.message,
                        report.invoice_id.as_deref(),
                        report.supplier_id.as_deref(),
                        report.customer_id.as_deref(),
                    )
                    .await;
                Ok(report)
            }
            Err(err) => {
                tracing::error!(filename, error = %err, "import attempt failed");
                self.recorder
                    .record(
                        filename,
                        ImportStatus::Error,
                        &err.to_string(),
                        None,
                        supplier_id.as_deref(),
                        customer_id.as_deref(),
                    )
                    .await;
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        filename: &str,
        bytes: &[u8],
        supplier_id: &mut Option<String>,
        customer_id: &mut Option<String>,
    ) -> Result<ImportReport, ImportError> {
        let doc = extract_invoice(bytes)?;

        let fornitore = self
            .resolver
            .resolve_or_create(EntityKind::Supplier, &doc.supplier_vat, &doc.supplier_name)
            .await?;
        *supplier_id = Some(fornitore.clone());

        let cliente = self
            .resolver
            .resolve_or_create(EntityKind::Customer, &doc.customer_vat, &doc.customer_name)
            .await?;
        *customer_id = Some(cliente.clone());

        // Dedup on (numero, idfornitore): the same number under a different
        // supplier is a distinct invoice, not a duplicate.
        if let Some(existing) = self
            .store
            .find_by(
                "fatture",
                &[
                    ("numero", doc.number.as_str()),
                    ("idfornitore", fornitore.as_str()),
                ],
            )
            .await?
        {
            tracing::info!(filename, numero = %doc.number, "invoice already present, ignored");
            return Ok(ImportReport {
                status: ImportStatus::Ignored,
                message: format!("fattura {} già presente", doc.number),
                invoice_id: row_id(&existing).ok(),
                supplier_id: Some(fornitore),
                customer_id: Some(cliente),
            });
        }

        let invoice_id = Uuid::new_v4().to_string();
        self.store
            .insert(
                "fatture",
                &InvoiceRow {
                    id: &invoice_id,
                    numero: &doc.number,
                    data: &doc.issue_date,
                    importototale: doc.total,
                    filename,
                    idfornitore: &fornitore,
                    codicecliente: &cliente,
                },
            )
            .await?;
        tracing::info!(filename, numero = %doc.number, id = %invoice_id, "invoice imported");

        Ok(ImportReport {
            status: ImportStatus::Success,
            message: format!("fattura {} importata", doc.number),
            invoice_id: Some(invoice_id),
            supplier_id: Some(fornitore),
            customer_id: Some(cliente),
        })
    }
}
