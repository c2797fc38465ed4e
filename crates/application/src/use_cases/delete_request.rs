//! Delete request use case.

use quiver_domain::Document;
use tracing::debug;

/// Removes the first request named `request_name` from the first group named
/// `group_name`.
///
/// Returns an unchanged copy when either lookup fails.
#[must_use]
pub fn delete_request(doc: &Document, group_name: &str, request_name: &str) -> Document {
    let mut updated = doc.clone();
    let Some(group) = updated.groups.iter_mut().find(|g| g.name == group_name) else {
        debug!(group = group_name, "delete_request: no such group");
        return updated;
    };
    match group.position_of(request_name) {
        Some(index) => {
            group.requests.remove(index);
        }
        None => debug!(
            group = group_name,
            request = request_name,
            "delete_request: no such request"
        ),
    }
    updated
}
