//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use shiftclock_common::time::{DurationParseError, TimeError};
use thiserror::Error;

/// Main error type for ShiftClock
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShiftClockError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Time error: {0}")]
    Time(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShiftClockError {
    /// Stable label for logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidInput(_) => "invalid_input",
            Self::Time(_) => "time",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<TimeError> for ShiftClockError {
    fn from(err: TimeError) -> Self {
        Self::Time(err.to_string())
    }
}

impl From<DurationParseError> for ShiftClockError {
    fn from(err: DurationParseError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for ShiftClock operations
pub type Result<T> = std::result::Result<T, ShiftClockError>;
