use thiserror::Error;

/// Errors that abort an import attempt.
///
/// The document-level variants (`MalformedXml`, `MissingSection`,
/// `MissingField`, `InvalidAmount`) occur before anything is written to the
/// store and are the uploader's fault; `Persistence` can occur at any stage
/// of the pipeline and is ours.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImportError {
    /// The uploaded bytes are not a well-formed XML document.
    #[error("malformed XML document: {0}")]
    MalformedXml(String),

    /// A mandatory section (CedentePrestatore, CessionarioCommittente) is
    /// absent from an otherwise well-formed document.
    #[error("missing section: {0}")]
    MissingSection(String),

    /// A mandatory business field is absent or empty.
    #[error("missing field: {0}")]
    MissingField(String),

    /// ImportoTotaleDocumento does not parse as a decimal number.
    #[error("invalid total amount: {0:?}")]
    InvalidAmount(String),

    /// The remote store was unreachable or rejected a read/write.
    #[cfg(feature = "store")]
    #[error("persistence error: {0}")]
    Persistence(#[from] crate::store::StoreError),
}

impl ImportError {
    /// Whether the error is a defect of the uploaded document rather than of
    /// the pipeline or the store. Document errors map to 400-class responses
    /// at the HTTP boundary, everything else to 500-class.
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedXml(_)
                | Self::MissingSection(_)
                | Self::MissingField(_)
                | Self::InvalidAmount(_)
        )
    }
}
