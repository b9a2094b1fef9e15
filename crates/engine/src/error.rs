//! Error types for the engine layer.
//!
//! Mutation and merge operations never fail; only export serialization can,
//! and even that only on writer or encoding failures.

use thiserror::Error;

/// Errors raised while serializing a character to XML.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying writer failure
    #[error("XML write failed: {0}")]
    Io(#[from] std::io::Error),

    /// XML event serialization failure
    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
