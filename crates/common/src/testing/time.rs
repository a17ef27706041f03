//! Wall-clock abstraction for testability
//!
//! Live timers and session views ask a [`Clock`] for "now" instead of calling
//! `Utc::now()` directly, so tests can pin and advance time.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use chrono::{TimeZone, Utc};
//! use shiftclock_common::testing::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! let _now = clock.now();
//!
//! // Use mock clock in tests
//! let mock = MockClock::at(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
//! let start = mock.now();
//! mock.advance(Duration::from_secs(5));
//! assert_eq!((mock.now() - start).num_seconds(), 5);
//! ```

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// Source of the current UTC instant
pub trait Clock: Send + Sync {
    /// Current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the UNIX epoch.
    fn millis_since_epoch(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Real system clock implementation
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock clock for deterministic testing
///
/// Time only moves when told to. Clones share the same instant, so a test
/// can keep one handle while a timer holds another.
#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a mock clock frozen at the current real time.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Create a mock clock frozen at `instant`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(instant)) }
    }

    /// Move the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let Ok(step) = chrono::Duration::from_std(duration) else {
            return;
        };
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(next) = now.checked_add_signed(step) {
            *now = next;
        }
    }

    /// Jump to an absolute instant, forwards or backwards.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for testing::time.
    use chrono::TimeZone;

    use super::*;

    fn nine_am() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
        assert!(clock.millis_since_epoch() > 0);
    }

    #[test]
    fn test_mock_clock_is_frozen_until_advanced() {
        let clock = MockClock::at(nine_am());
        assert_eq!(clock.now(), nine_am());
        assert_eq!(clock.now(), nine_am());

        clock.advance(Duration::from_millis(1_500));
        assert_eq!((clock.now() - nine_am()).num_milliseconds(), 1_500);
    }

    #[test]
    fn test_mock_clock_set_can_go_backwards() {
        let clock = MockClock::at(nine_am());
        let earlier = Utc.with_ymd_and_hms(2025, 1, 14, 23, 0, 0).unwrap();
        clock.set(earlier);
        assert_eq!(clock.now(), earlier);
        assert_eq!(clock.millis_since_epoch(), earlier.timestamp_millis());
    }

    #[test]
    fn test_mock_clock_clones_share_time() {
        let clock = MockClock::at(nine_am());
        let shared = clock.clone();

        clock.advance(Duration::from_secs(60));
        assert_eq!(shared.now(), Utc.with_ymd_and_hms(2025, 1, 15, 9, 1, 0).unwrap());
    }
}
