//! Create request use case.

use quiver_domain::{HttpMethod, Request, make_request_at};

use crate::ports::Clock;

/// Input for creating a new request.
#[derive(Debug, Clone, Default)]
pub struct CreateRequestInput {
    /// Base name; empty means "New Request".
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Raw URL.
    pub url: String,
}

/// Use case for building a fresh, timestamp-named request.
pub struct CreateRequest<C: Clock> {
    clock: C,
}

impl<C: Clock> CreateRequest<C> {
    /// Creates a new `CreateRequest` use case.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Builds the request. The result still has to be placed into a group
    /// with [`add_request`](super::add_request).
    #[must_use]
    pub fn execute(&self, input: CreateRequestInput) -> Request {
        make_request_at(&input.name, input.method, &input.url, self.clock.now())
    }
}
