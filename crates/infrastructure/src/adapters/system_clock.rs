//! System clock adapter

use chrono::{DateTime, Utc};
use quiver_application::ports::Clock;

/// Clock backed by the system time; what the CLI uses to name new requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic_enough_for_naming() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
        // 2020-01-01T00:00:00Z
        assert!(first.timestamp_millis() > 1_577_836_800_000);
    }
}
