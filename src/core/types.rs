use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The flat record pulled out of one FatturaPA document — everything the
/// importer needs, fully populated or not produced at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedInvoice {
    /// Supplier VAT number, country prefix included (e.g. "IT12345678901").
    pub supplier_vat: String,
    /// Supplier display name (Denominazione).
    pub supplier_name: String,
    /// Customer VAT number, country prefix included.
    pub customer_vat: String,
    /// Customer display name.
    pub customer_name: String,
    /// Invoice number as printed in the document (e.g. "2024/001").
    pub number: String,
    /// Issue date kept as opaque text; the source format is preserved.
    pub issue_date: String,
    /// Document total (ImportoTotaleDocumento).
    pub total: Decimal,
}

/// Which of the two party collections an entity lives in. Suppliers and
/// customers are structurally identical but keyed in separate namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Supplier,
    Customer,
}

impl EntityKind {
    /// Name of the remote table backing this collection.
    pub fn table(self) -> &'static str {
        match self {
            Self::Supplier => "fornitori",
            Self::Customer => "clienti",
        }
    }
}

/// Terminal outcome of one import attempt, as recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportStatus {
    Success,
    Ignored,
    Error,
}

impl ImportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Ignored => "ignored",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ImportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
