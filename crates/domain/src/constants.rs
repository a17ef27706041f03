//! Application constants
//!
//! Centralized location for domain-level constants shared by the display
//! and timer layers.

// Display constants
/// Shown by a timer with no start instant
pub const IDLE_DISPLAY: &str = "00:00:00";
/// Shown for any field that cannot be rendered
pub const PLACEHOLDER: &str = "—";

// Timer configuration
/// Default tick period as a duration string
pub const DEFAULT_TICK_INTERVAL: &str = "1s";
/// Default tick period in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

// Company defaults
/// Company zone used when none is configured
pub const DEFAULT_COMPANY_TIMEZONE: &str = "America/New_York";
/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en-US";
/// Log level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Environment variables read by the configuration loader
/// Company IANA zone (required for env-based config)
pub const ENV_COMPANY_TIMEZONE: &str = "SHIFTCLOCK_COMPANY_TIMEZONE";
/// Locale tag
pub const ENV_LOCALE: &str = "SHIFTCLOCK_LOCALE";
/// Tick period, e.g. `1s`
pub const ENV_TICK_INTERVAL: &str = "SHIFTCLOCK_TICK_INTERVAL";
/// Log level or filter directive
pub const ENV_LOG_LEVEL: &str = "SHIFTCLOCK_LOG_LEVEL";
/// `true` for JSON log lines
pub const ENV_LOG_JSON: &str = "SHIFTCLOCK_LOG_JSON";
