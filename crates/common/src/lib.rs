//! Time utilities shared across ShiftClock crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: duration math, `HH:MM:SS` formatting, company timezones,
//!   clocks, serde helpers
//! - `runtime`: the tokio-backed [`time::timer::Ticker`]
//! - `observability`: optional tracing (included by `runtime`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod utils;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use testing::time::{Clock, MockClock, SystemClock};
#[cfg(feature = "foundation")]
pub use time::{
    elapsed_seconds, format_hms, net_work_seconds, total_break_seconds, CompanyTimezone,
    DateLocale, LocalDisplay, TimeError,
};
#[cfg(feature = "runtime")]
pub use time::timer::{Ticker, TickerHandle};
#[cfg(feature = "foundation")]
pub use utils::serde::utc_instant;
