//! Application use cases (document mutations).
//!
//! Lookups are first-match by name. A mutation whose target group or request
//! does not exist returns an unchanged copy of the input document.

mod add_group;
mod add_request;
mod create_request;
mod delete_request;
mod manage_assertions;
mod update_request;

pub use add_group::*;
pub use add_request::*;
pub use create_request::*;
pub use delete_request::*;
pub use manage_assertions::*;
pub use update_request::*;
