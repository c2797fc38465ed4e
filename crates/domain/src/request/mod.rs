//! Request-level value types shared across the collection model.

mod method;

pub use method::HttpMethod;
