//! Collection export.
//!
//! The document model already matches the interchange format field-for-field,
//! so exporting is a direct structural encode through the stable serializer.

use thiserror::Error;

use quiver_domain::Document;

use crate::serialization::{SerializationError, to_json_stable};

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The document could not be encoded.
    #[error("failed to encode collection: {0}")]
    Encode(#[from] SerializationError),
}

/// Renders a document as pretty-printed collection JSON.
///
/// # Errors
///
/// Returns an error if encoding fails, which the model's types do not allow
/// in practice.
pub fn export_text(doc: &Document) -> Result<String, ExportError> {
    Ok(to_json_stable(doc)?)
}

/// Same as [`export_text`], as bytes ready to write to a file.
///
/// # Errors
///
/// Returns an error if encoding fails.
pub fn export_bytes(doc: &Document) -> Result<Vec<u8>, ExportError> {
    export_text(doc).map(String::into_bytes)
}
