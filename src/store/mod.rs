//! Remote table-store access: transport client, entity resolution, audit log.
//!
//! The store is a generic REST table API (PostgREST-style): filtered reads
//! with `?field=eq.value` and JSON row inserts, nothing else. The pipeline
//! never updates or deletes a row.

mod client;
mod config;
mod log;
mod resolver;

pub(crate) use client::row_id;
pub use client::{StoreError, TableStore};
pub use config::StoreConfig;
pub use log::ImportLogRecorder;
pub use resolver::EntityResolver;
