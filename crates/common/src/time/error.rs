//! Errors raised at the boundary of the time utilities
//!
//! The calculators themselves never fail; everything that can go wrong is
//! parsing an instant, a wall-clock string or a zone name, or scheduling a
//! ticker.

use thiserror::Error;

/// Error type for time parsing and scheduling
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Invalid instant '{0}': expected an ISO-8601 timestamp")]
    InvalidInstant(String),

    #[error("Invalid wall-clock value '{0}'")]
    InvalidWallClock(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Tick period must be greater than zero")]
    ZeroPeriod,

    #[error("Ticker requires a running tokio runtime")]
    NoRuntime,
}
