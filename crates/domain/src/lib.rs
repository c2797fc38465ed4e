//! Quiver Domain - Core collection types
//!
//! This crate defines the collection document model, its literal builders,
//! and the assertion script generator. All types here are pure Rust with no
//! I/O dependencies.

pub mod assertion;
pub mod collection;
pub mod error;
pub mod request;

pub use assertion::{
    Assertion, ExpectedValue, array_length_assertion, assertion_title, json_path_assertion,
    status_code_assertion,
};
pub use collection::{
    Body, CANONICAL_SCHEMA, DEFAULT_SCRIPT_TYPE, Document, Group, Header, Info, Request,
    RequestDetails, TestScript, Url, empty_document, make_group, make_request, make_request_at,
};
pub use error::{DomainError, DomainResult};
pub use request::HttpMethod;
