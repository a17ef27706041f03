//! Duration strings for configuration
//!
//! Tick intervals are configured as short strings (`"1s"`, `"500ms"`,
//! `"1m 30s"`) and parsed into `std::time::Duration` here.

use std::time::Duration;

use thiserror::Error;

/// Error type for duration parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("Invalid duration format: {0}")]
    InvalidFormat(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Empty duration string")]
    EmptyString,
}

/// Parse a duration string into a Duration
///
/// Each component is a number (decimals allowed) followed by one of `us`,
/// `ms`, `s`, `m`, `h`, `d`. Components may be separated by whitespace.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use shiftclock_common::time::parse_duration;
///
/// assert_eq!(parse_duration("1s").unwrap(), Duration::from_secs(1));
/// assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
/// assert_eq!(parse_duration("1m 30s").unwrap(), Duration::from_secs(90));
/// assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
/// ```
pub fn parse_duration(s: &str) -> Result<Duration, DurationParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DurationParseError::EmptyString);
    }

    let mut total = Duration::ZERO;
    let mut rest = s;

    while !rest.is_empty() {
        rest = rest.trim_start();

        let number_len =
            rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(rest.len());
        if number_len == 0 {
            return Err(DurationParseError::InvalidFormat(format!(
                "Expected number before unit in '{s}'"
            )));
        }
        let (number, after_number) = rest.split_at(number_len);

        let unit_len =
            after_number.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(after_number.len());
        if unit_len == 0 {
            return Err(DurationParseError::InvalidFormat(format!(
                "Missing unit after number in '{s}'"
            )));
        }
        let (unit, after_unit) = after_number.split_at(unit_len);

        let value: f64 =
            number.parse().map_err(|_| DurationParseError::InvalidNumber(number.to_string()))?;

        let nanos_per_unit: f64 = match unit {
            "us" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60e9,
            "h" => 3600e9,
            "d" => 86_400e9,
            other => return Err(DurationParseError::UnknownUnit(other.to_string())),
        };

        total += Duration::from_nanos((value * nanos_per_unit).round() as u64);
        rest = after_unit;
    }

    Ok(total)
}

/// Parse a duration string into whole milliseconds
///
/// ```
/// use shiftclock_common::time::duration::parse_duration_ms;
///
/// assert_eq!(parse_duration_ms("1m 30s").unwrap(), 90_000);
/// ```
pub fn parse_duration_ms(s: &str) -> Result<u64, DurationParseError> {
    let duration = parse_duration(s)?;
    u64::try_from(duration.as_millis())
        .map_err(|_| DurationParseError::InvalidNumber(format!("'{s}' is out of range")))
}
