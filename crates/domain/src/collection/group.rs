//! Groups of requests (folders in the interchange format).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::request::Request;

/// A named folder of requests.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Group {
    /// Group name. Not required to be unique.
    pub name: String,
    /// Requests in display order.
    #[serde(rename = "item", default)]
    pub requests: Vec<Request>,
    /// Opaque protocol behavior flags, passed through unmodified.
    #[serde(rename = "protocolProfileBehavior", default)]
    pub behavior_flags: Map<String, Value>,
}

impl Group {
    /// Creates a new empty group. The name is used verbatim.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requests: Vec::new(),
            behavior_flags: Map::new(),
        }
    }

    /// Returns the first request with the given name.
    #[must_use]
    pub fn find_request(&self, name: &str) -> Option<&Request> {
        self.requests.iter().find(|r| r.name == name)
    }

    /// Returns the index of the first request with the given name.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.requests.iter().position(|r| r.name == name)
    }
}
