//! Types and errors shared by every stage of the ingestion pipeline.

mod error;
mod types;

pub use error::*;
pub use types::*;
