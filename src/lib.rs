//! # fatture
//!
//! FatturaPA invoice ingestion pipeline: namespace-tolerant XML extraction,
//! VAT-keyed entity resolution, deduplicated invoice import into a remote
//! REST table store, and a best-effort audit log of every attempt.
//!
//! Monetary totals use [`rust_decimal::Decimal`] — never floating point in
//! memory.
//!
//! ## Quick start
//!
//! ```rust
//! use fatture::extract::extract_invoice;
//! use rust_decimal_macros::dec;
//!
//! let xml = r#"<?xml version="1.0"?>
//! <p:FatturaElettronica xmlns:p="http://ivaservizi.agenziaentrate.gov.it/docs/xsd/fatture/v1.2">
//!   <FatturaElettronicaHeader>
//!     <CedentePrestatore><DatiAnagrafici>
//!       <IdFiscaleIVA><IdPaese>IT</IdPaese><IdCodice>12345678901</IdCodice></IdFiscaleIVA>
//!       <Anagrafica><Denominazione>Rossi S.r.l.</Denominazione></Anagrafica>
//!     </DatiAnagrafici></CedentePrestatore>
//!     <CessionarioCommittente><DatiAnagrafici>
//!       <IdFiscaleIVA><IdPaese>IT</IdPaese><IdCodice>98765432109</IdCodice></IdFiscaleIVA>
//!       <Anagrafica><Denominazione>Bianchi S.p.A.</Denominazione></Anagrafica>
//!     </DatiAnagrafici></CessionarioCommittente>
//!   </FatturaElettronicaHeader>
//!   <FatturaElettronicaBody>
//!     <DatiGenerali><DatiGeneraliDocumento>
//!       <Numero>2024/001</Numero>
//!       <Data>2024-03-15</Data>
//!       <ImportoTotaleDocumento>150.00</ImportoTotaleDocumento>
//!     </DatiGeneraliDocumento></DatiGenerali>
//!   </FatturaElettronicaBody>
//! </p:FatturaElettronica>"#;
//!
//! let doc = extract_invoice(xml.as_bytes()).unwrap();
//! assert_eq!(doc.supplier_vat, "IT12345678901");
//! assert_eq!(doc.number, "2024/001");
//! assert_eq!(doc.total, dec!(150.00));
//! ```
//!
//! The same document without a namespace declaration extracts identically:
//! elements are matched by local name, so prefix and namespace variance
//! never reaches the field lookup.
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Shared types and the error taxonomy |
//! | `extract` | FatturaPA XML extraction (quick-xml) |
//! | `store` | REST table-store client, entity resolver, audit log |
//! | `import` (default) | The full pipeline orchestrator |
//! | `server` | Axum upload endpoint and liveness probe |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "extract")]
pub mod extract;

#[cfg(feature = "store")]
pub mod store;

#[cfg(feature = "import")]
pub mod import;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
