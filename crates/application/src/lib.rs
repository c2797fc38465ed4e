//! Quiver Application - Document editing use cases
//!
//! Every operation here takes a [`Document`](quiver_domain::Document) by
//! reference and returns a new one. The input document is never modified, so
//! the host can keep the previous value for undo or discard the result.

pub mod ports;
pub mod use_cases;

pub use use_cases::{
    CreateRequest, CreateRequestInput, RequestDetailsPatch, RequestPatch, add_assertion,
    add_group, add_request, delete_request, remove_assertion, update_request,
};
