use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use super::client::TableStore;
use crate::core::ImportStatus;

#[derive(Debug, Serialize)]
struct LogRow<'a> {
    id: String,
    filename: &'a str,
    status: &'static str,
    error_message: &'a str,
    processed_at: String,
    fattura_id: Option<&'a str>,
    fornitore_id: Option<&'a str>,
    cliente_id: Option<&'a str>,
}

/// Audit trail of import attempts: one `import_log` row per attempt.
pub struct ImportLogRecorder {
    store: Arc<TableStore>,
}

impl ImportLogRecorder {
    pub fn new(store: Arc<TableStore>) -> Self {
        Self { store }
    }

    /// Write one audit row. Failures never reach the caller: losing an audit
    /// entry must not turn a finished import into a reported error, so a
    /// failed write goes to the operational log only.
    pub async fn record(
        &self,
        filename: &str,
        status: ImportStatus,
        message: &str,
        fattura_id: Option<&str>,
        fornitore_id: Option<&str>,
        cliente_id: Option<&str>,
    ) {
        let row = LogRow {
            id: Uuid::new_v4().to_string(),
            filename,
            status: status.as_str(),
            error_message: message,
            processed_at: Utc::now().to_rfc3339(),
            fattura_id,
            fornitore_id,
            cliente_id,
        };

        if let Err(e) = self.store.insert("import_log", &row).await {
            tracing::warn!(filename, status = %status, error = %e, "import_log write failed");
        }
    }
}
