use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::config::StoreConfig;

/// Transport-level failure talking to the table store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// Connection, TLS, or timeout error.
    #[error("store request failed: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("store rejected request: {0}")]
    Rejected(String),

    /// The store answered 2xx but the body was not what we expect.
    #[error("store response not decodable: {0}")]
    Decode(String),
}

/// Thin HTTP client over the four logical tables.
///
/// All calls carry the configured timeout and credentials; callers never
/// touch the transport directly.
pub struct TableStore {
    http: reqwest::Client,
    config: StoreConfig,
}

impl TableStore {
    /// # Errors
    ///
    /// `StoreError::Network` if the underlying HTTP client cannot be built.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.config.base_url, table)
    }

    /// First row of `table` where every `(field, value)` filter matches,
    /// `None` when no row does.
    pub async fn find_by(
        &self,
        table: &str,
        filters: &[(&str, &str)],
    ) -> Result<Option<Value>, StoreError> {
        let query: Vec<(String, String)> = filters
            .iter()
            .map(|(field, value)| ((*field).to_string(), format!("eq.{value}")))
            .collect();

        let resp = self
            .http
            .get(self.table_url(table))
            .query(&query)
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::Rejected(format!(
                "GET {table}: HTTP {status}: {body}"
            )));
        }

        let rows: Vec<Value> =
            serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(rows.into_iter().next())
    }

    /// Append one row to `table`. The store is append-only from this
    /// pipeline's point of view.
    pub async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let resp = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(row)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Rejected(format!(
                "POST {table}: HTTP {status}: {body}"
            )));
        }
        Ok(())
    }
}

/// Generated identifier of a row returned by the store. Rows written by this
/// pipeline carry string ids, but a pre-seeded table may use numbers.
pub(crate) fn row_id(row: &Value) -> Result<String, StoreError> {
    match row.get("id") {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(StoreError::Decode("row without an id field".into())),
    }
}
