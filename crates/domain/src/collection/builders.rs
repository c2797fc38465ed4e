//! Literal builders for fresh documents, groups and requests.

use chrono::{DateTime, Utc};

use super::document::Document;
use super::group::Group;
use super::request::Request;
use crate::request::HttpMethod;

/// Name prefix used when a request is created without a name.
const UNNAMED_REQUEST_PREFIX: &str = "New Request";

/// Returns an empty document.
#[must_use]
pub fn empty_document() -> Document {
    Document::empty()
}

/// Returns an empty group with the given name.
#[must_use]
pub fn make_group(name: impl Into<String>) -> Group {
    Group::new(name)
}

/// Builds the timestamped name handed to new requests.
///
/// Names are `"<name> <millis>"`, or `"New Request <millis>"` when `name` is
/// empty. Two calls within the same millisecond produce the same name.
#[must_use]
pub fn generated_request_name(name: &str, at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis();
    if name.is_empty() {
        format!("{UNNAMED_REQUEST_PREFIX} {millis}")
    } else {
        format!("{name} {millis}")
    }
}

/// Creates a request named after `name` and the given timestamp.
#[must_use]
pub fn make_request_at(name: &str, method: HttpMethod, url: &str, at: DateTime<Utc>) -> Request {
    Request::new(generated_request_name(name, at), method, url)
}

/// Creates a request named after `name` and the current time.
#[must_use]
pub fn make_request(name: &str, method: HttpMethod, url: &str) -> Request {
    make_request_at(name, method, url, Utc::now())
}
