//! Add group use case.

use quiver_domain::{Document, make_group};

/// Appends a new empty group named `name`.
///
/// Names are not deduplicated: adding "X" twice yields two groups named "X".
#[must_use]
pub fn add_group(doc: &Document, name: &str) -> Document {
    let mut updated = doc.clone();
    updated.groups.push(make_group(name));
    updated
}
