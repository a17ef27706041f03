//! Time-clocking utilities
//!
//! This module provides the time math behind every clocking display:
//! - **[`elapsed`]**: elapsed, break and net work seconds
//! - **[`format`]**: `HH:MM:SS` rendering
//! - **[`timezone`]**: company-local display, wall-clock to UTC conversion,
//!   calendar dates
//! - **[`duration`]**: duration strings for tick intervals
//! - **[`timer`]**: the repeating ticker that drives live displays (`runtime`)
//! - **Clock abstractions**: real and mock wall clocks (re-exported from
//!   testing)
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use shiftclock_common::time::{format_hms, net_work_seconds};
//!
//! let clock_in = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
//! let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
//! let lunch = (
//!     Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap(),
//!     Some(Utc.with_ymd_and_hms(2025, 1, 15, 9, 45, 0).unwrap()),
//! );
//!
//! let worked = net_work_seconds(clock_in, None, [lunch], now);
//! assert_eq!(format_hms(worked), "00:55:00");
//! ```

pub mod duration;
pub mod elapsed;
pub mod error;
pub mod format;
#[cfg(feature = "runtime")]
pub mod timer;
pub mod timezone;

// Re-export commonly used items
pub use duration::{parse_duration, parse_duration_ms, DurationParseError};
pub use elapsed::{elapsed_seconds, net_work_seconds, total_break_seconds, Span};
pub use error::TimeError;
pub use format::{format_hms, format_hms_or_placeholder};
#[cfg(feature = "runtime")]
pub use timer::{Ticker, TickerHandle};
pub use timezone::{
    format_calendar_date, format_instant, legacy_wall_clock_to_utc, local_time_label,
    local_wall_clock_to_utc, parse_instant, parse_wall_clock, to_local_display, CompanyTimezone,
    DateLocale, LocalDisplay,
};

// Re-export Clock abstractions from testing module
pub use crate::testing::time::{Clock, MockClock, SystemClock};
