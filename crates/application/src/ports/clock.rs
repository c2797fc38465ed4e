//! Clock port for request naming

use chrono::{DateTime, Utc};

/// Port for getting the current time.
///
/// New requests are named after the current millisecond; going through this
/// port lets tests and scripted hosts pin that value.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
