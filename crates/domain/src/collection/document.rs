//! Top-level collection document.

use serde::{Deserialize, Serialize};

use super::group::Group;
use super::request::Request;

/// Schema identifier of the interchange format version this model targets.
pub const CANONICAL_SCHEMA: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Placeholder name given to documents that do not carry one.
pub const DEFAULT_DOCUMENT_NAME: &str = "New Collection";

/// Collection metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    /// Display name of the collection.
    pub name: String,
    /// Interchange-format schema identifier.
    pub schema: String,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            name: DEFAULT_DOCUMENT_NAME.to_string(),
            schema: CANONICAL_SCHEMA.to_string(),
        }
    }
}

/// A whole collection: metadata plus an ordered list of groups.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Collection metadata.
    pub info: Info,
    /// Groups in display order.
    #[serde(rename = "item", default)]
    pub groups: Vec<Group>,
}

impl Document {
    /// Creates an empty document with the placeholder name and canonical schema.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the first group with the given name.
    #[must_use]
    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Returns the first request with the given name, scanning groups in order.
    #[must_use]
    pub fn find_request(&self, name: &str) -> Option<&Request> {
        self.groups.iter().find_map(|g| g.find_request(name))
    }

    /// Returns the total number of requests across all groups.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.groups.iter().map(|g| g.requests.len()).sum()
    }
}
