//! Add and remove single assertion blocks on a request.
//!
//! Both operations rebuild the request's full `exec` list and install it
//! through a `tests` patch, so they follow the same first-match rule as
//! [`update_request`].

use quiver_domain::Document;
use tracing::debug;

use super::update_request::{RequestPatch, update_request};

/// Appends an assertion block to the first request named `request_name`.
#[must_use]
pub fn add_assertion(doc: &Document, request_name: &str, block: impl Into<String>) -> Document {
    let Some(request) = doc.find_request(request_name) else {
        debug!(request = request_name, "add_assertion: no such request");
        return doc.clone();
    };
    let mut exec = request.assertions().to_vec();
    exec.push(block.into());
    let patch = RequestPatch::tests(request.tests_with_assertions(exec));
    update_request(doc, request_name, &patch)
}

/// Removes the assertion block at `index` from the first request named
/// `request_name`. Out-of-range indexes leave the document unchanged.
#[must_use]
pub fn remove_assertion(doc: &Document, request_name: &str, index: usize) -> Document {
    let Some(request) = doc.find_request(request_name) else {
        debug!(request = request_name, "remove_assertion: no such request");
        return doc.clone();
    };
    if index >= request.assertions().len() {
        debug!(request = request_name, index, "remove_assertion: index out of range");
        return doc.clone();
    }
    let mut exec = request.assertions().to_vec();
    exec.remove(index);
    let patch = RequestPatch::tests(request.tests_with_assertions(exec));
    update_request(doc, request_name, &patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::{add_group, add_request};
    use pretty_assertions::assert_eq;
    use quiver_domain::{HttpMethod, Request, empty_document, status_code_assertion};

    fn seeded() -> Document {
        let doc = add_group(&empty_document(), "G");
        add_request(&doc, "G", Request::new("R", HttpMethod::Get, "http://x"))
    }

    #[test]
    fn test_add_assertions_accumulate_in_order() {
        let doc = add_assertion(&seeded(), "R", status_code_assertion("ok", 200));
        let doc = add_assertion(&doc, "R", status_code_assertion("created", 201));

        let request = doc.find_request("R").map(Request::assertions).unwrap_or_default();
        assert_eq!(request.len(), 2);
        assert!(request[1].contains("status(201)"));
        assert_eq!(doc.groups[0].requests[0].tests.len(), 1);
    }

    #[test]
    fn test_remove_assertion_by_index() {
        let doc = add_assertion(&seeded(), "R", "first");
        let doc = add_assertion(&doc, "R", "second");
        let doc = remove_assertion(&doc, "R", 0);

        assert_eq!(doc.groups[0].requests[0].assertions(), ["second".to_string()]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let doc = add_assertion(&seeded(), "R", "only");
        assert_eq!(remove_assertion(&doc, "R", 3), doc);
    }

    #[test]
    fn test_missing_request_is_noop() {
        let doc = seeded();
        assert_eq!(add_assertion(&doc, "Nope", "x"), doc);
        assert_eq!(remove_assertion(&doc, "Nope", 0), doc);
    }
}
