//! Collection document model.
//!
//! A [`Document`] is a Postman Collection v2.1 compatible tree: an `info`
//! header and an ordered list of [`Group`]s, each holding [`Request`]s. The
//! types serialize field-for-field to the interchange format, so exporting is
//! a plain structural encode.
//!
//! Group and request names are identifiers but are never checked for
//! uniqueness. Every lookup in this crate and above it is first-match.

mod builders;
mod document;
mod group;
mod request;
mod script;

pub use builders::{
    empty_document, generated_request_name, make_group, make_request, make_request_at,
};
pub use document::{CANONICAL_SCHEMA, DEFAULT_DOCUMENT_NAME, Document, Info};
pub use group::Group;
pub use request::{Body, DEFAULT_BODY_MODE, Header, Request, RequestDetails, Url};
pub use script::{DEFAULT_SCRIPT_TYPE, Script, ScriptTrigger, TestScript};
