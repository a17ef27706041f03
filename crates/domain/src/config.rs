//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shiftclock_common::time::{parse_duration, CompanyTimezone, DateLocale};

use crate::constants::{
    DEFAULT_COMPANY_TIMEZONE, DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, DEFAULT_TICK_INTERVAL,
};
use crate::errors::{Result, ShiftClockError};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Company zone and locale
    pub company: CompanyConfig,
    /// Live timer settings
    #[serde(default)]
    pub timer: TimerConfig,
    /// Subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Company-wide display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// IANA zone name every wall-clock value is displayed in
    pub timezone: String,
    /// BCP 47 tag; only `en-US` changes the calendar-date layout
    #[serde(default = "default_locale")]
    pub locale: String,
}

/// Live timer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Tick period as a duration string (`"1s"`, `"500ms"`)
    pub tick_interval: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive, e.g. `info` or `shiftclock_core=debug`
    pub level: String,
    /// Emit JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company: CompanyConfig {
                timezone: DEFAULT_COMPANY_TIMEZONE.to_string(),
                locale: default_locale(),
            },
            timer: TimerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { tick_interval: DEFAULT_TICK_INTERVAL.to_string() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}

impl Config {
    /// Reject blank fields, unknown zones and unusable tick intervals.
    ///
    /// # Errors
    /// Returns `ShiftClockError::Config` for blank fields and bad tick
    /// intervals, `ShiftClockError::Time` for an unknown timezone.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("company.timezone", &self.company.timezone),
            ("company.locale", &self.company.locale),
            ("timer.tick_interval", &self.timer.tick_interval),
            ("logging.level", &self.logging.level),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ShiftClockError::Config(format!("{name} must not be empty")));
            }
        }

        self.company_timezone()?;
        self.tick_interval()?;
        Ok(())
    }

    /// The configured company zone.
    ///
    /// # Errors
    /// Returns `ShiftClockError::Time` if the name is not an IANA zone.
    pub fn company_timezone(&self) -> Result<CompanyTimezone> {
        Ok(CompanyTimezone::parse(&self.company.timezone)?)
    }

    /// Calendar-date layout selected by the configured locale.
    pub fn date_locale(&self) -> DateLocale {
        DateLocale::from_tag(&self.company.locale)
    }

    /// Tick period of live timers.
    ///
    /// # Errors
    /// Returns `ShiftClockError::Config` if the interval does not parse or is
    /// zero.
    pub fn tick_interval(&self) -> Result<Duration> {
        let interval = parse_duration(&self.timer.tick_interval)?;
        if interval.is_zero() {
            return Err(ShiftClockError::Config("timer.tick_interval must be positive".to_string()));
        }
        Ok(interval)
    }
}
