//! Testing utilities and helpers
//!
//! - **[`time`]**: the wall-clock abstraction live timers read "now" from,
//!   with a real and a controllable implementation
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shiftclock_common::testing::{Clock, MockClock};
//!
//! let clock = MockClock::at(Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap());
//! clock.advance(std::time::Duration::from_secs(5));
//! assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 5).unwrap());
//! ```

pub mod time;

// Re-export commonly used items
pub use time::{Clock, MockClock, SystemClock};
