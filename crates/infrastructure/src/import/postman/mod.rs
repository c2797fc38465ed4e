//! Postman Import Module
//!
//! This module normalizes Postman Collection v2.x JSON, or anything shaped
//! roughly like it, into the Quiver document model.

pub mod importer;
pub mod raw;
pub mod warning;

pub use importer::{
    DEFAULT_GROUP_NAME, ImportConfig, ImportError, ImportOutcome, PostmanImporter,
    UNNAMED_GROUP, UNNAMED_REQUEST, import_document,
};
pub use raw::RawItem;
pub use warning::{ImportWarning, WarningSeverity, WarningStats};
