//! Collection importers.

pub mod postman;

pub use postman::{
    ImportConfig, ImportError, ImportOutcome, ImportWarning, PostmanImporter,
    WarningSeverity, WarningStats, import_document,
};
