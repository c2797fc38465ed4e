//! Quiver Infrastructure - Import, export and adapters
//!
//! This crate turns untrusted collection JSON into documents, renders
//! documents back to their canonical text, and provides concrete
//! implementations of the ports defined in the application layer.

pub mod adapters;
pub mod export;
pub mod import;
pub mod serialization;

pub use adapters::SystemClock;
pub use export::{ExportError, export_bytes, export_text};
pub use import::{
    ImportConfig, ImportError, ImportOutcome, ImportWarning, PostmanImporter,
    WarningSeverity, WarningStats, import_document,
};
pub use serialization::{SerializationError, from_json, to_json_stable};
