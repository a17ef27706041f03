//! Subscriber setup for binaries

use shiftclock_domain::{LoggingConfig, Result, ShiftClockError};
use tracing_subscriber::EnvFilter;

/// Build the event filter for `level`.
///
/// `RUST_LOG` wins when it is set and valid, so a single run can be made
/// more verbose without touching the config file.
///
/// # Errors
/// Returns `ShiftClockError::Config` if neither source is a valid filter.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| ShiftClockError::Config(format!("Invalid log level '{level}': {e}")))
}

/// Install the global fmt subscriber, as JSON lines when configured.
///
/// # Errors
/// - `ShiftClockError::Config` for an invalid level
/// - `ShiftClockError::Internal` if a global subscriber is already set
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };
    installed
        .map_err(|e| ShiftClockError::Internal(format!("Failed to install log subscriber: {e}")))?;

    tracing::debug!(level = %config.level, json = config.json, "logging initialised");
    Ok(())
}
