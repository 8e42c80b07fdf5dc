//! FatturaPA document extraction.
//!
//! Real-world documents disagree on whether the FatturaPA namespace is
//! declared and which prefix it carries ("p:", "ns2:", none at all). The
//! extractor streams the document once and matches elements by local name,
//! so namespaced and bare documents extract identically without a table of
//! known namespace URIs.

mod fatturapa;

pub use fatturapa::extract_invoice;
