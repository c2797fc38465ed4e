//! Add request use case.

use quiver_domain::{Document, Request};
use tracing::debug;

/// Appends `request` to the first group named `group_name`.
///
/// Returns an unchanged copy when no such group exists.
#[must_use]
pub fn add_request(doc: &Document, group_name: &str, request: Request) -> Document {
    let mut updated = doc.clone();
    match updated.groups.iter_mut().find(|g| g.name == group_name) {
        Some(group) => group.requests.push(request),
        None => debug!(group = group_name, "add_request: no such group"),
    }
    updated
}
