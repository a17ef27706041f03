//! Company timezone conversions
//!
//! Every clocking screen shows times in the company's zone, regardless of
//! where the viewer's machine is. Three conversions live here:
//!
//! - UTC instant to company-local date and time ([`to_local_display`])
//! - company-local wall-clock input back to a UTC instant
//!   ([`local_wall_clock_to_utc`]), used when corrections are submitted
//! - calendar dates for session rows ([`format_calendar_date`]), which must
//!   never shift by a day
//!
//! Zone names are validated once into a [`CompanyTimezone`]; after that the
//! conversions cannot fail.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc,
};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::TimeError;

/// Strict `YYYY-MM-DD` in ASCII digits with nothing before or after.
static CALENDAR_DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$")
        .expect("CALENDAR_DATE_REGEX should compile - this is a bug")
});

const MONTH_ABBREVIATIONS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Wall-clock layouts accepted by [`parse_wall_clock`], tried in order.
const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y, %I:%M:%S %p",
    "%m/%d/%Y, %I:%M %p",
];

/// A validated IANA zone the company displays its times in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyTimezone(Tz);

impl CompanyTimezone {
    /// Validate an IANA zone name.
    ///
    /// # Errors
    /// Returns [`TimeError::UnknownTimezone`] for names missing from the tz
    /// database. This is a configuration mistake and should surface loudly.
    pub fn parse(name: &str) -> Result<Self, TimeError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| TimeError::UnknownTimezone(name.to_string()))
    }

    /// Underlying tz database zone.
    pub const fn tz(&self) -> Tz {
        self.0
    }

    /// IANA identifier, e.g. `America/New_York`.
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl From<Tz> for CompanyTimezone {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

impl FromStr for CompanyTimezone {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CompanyTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout used for calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `en-US`: `Jan 15, 2025`
    #[default]
    UnitedStates,
    /// Everything else: `15 Jan 2025`
    International,
}

impl DateLocale {
    /// Map a BCP 47 tag onto a layout. Only `en-US` is special.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("en-us") {
            Self::UnitedStates
        } else {
            Self::International
        }
    }

    fn render(self, year: i32, month: u32, day: u32) -> Option<String> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        let abbreviation = MONTH_ABBREVIATIONS.get(index)?;
        Some(match self {
            Self::UnitedStates => format!("{abbreviation} {day}, {year}"),
            Self::International => format!("{day} {abbreviation} {year}"),
        })
    }
}

/// Company-local date and time of an instant, kept as separate fields.
///
/// `Display` joins them with `", "` for screens that expect the single
/// `MM/DD/YYYY, hh:mm:ss AM` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDisplay {
    /// `MM/DD/YYYY`
    pub date: String,
    /// `hh:mm:ss AM`
    pub time: String,
}

impl fmt::Display for LocalDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.date, self.time)
    }
}

/// Render `instant` as the date and 12-hour time shown in `timezone`,
/// daylight saving included.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shiftclock_common::time::{to_local_display, CompanyTimezone};
///
/// let tz = CompanyTimezone::parse("America/New_York").unwrap();
/// let instant = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap();
/// assert_eq!(to_local_display(instant, &tz).to_string(), "01/15/2025, 09:30:00 AM");
/// ```
pub fn to_local_display(instant: DateTime<Utc>, timezone: &CompanyTimezone) -> LocalDisplay {
    let local = instant.with_timezone(&timezone.tz());
    LocalDisplay {
        date: local.format("%m/%d/%Y").to_string(),
        time: local.format("%I:%M:%S %p").to_string(),
    }
}

/// Short `hh:mm AM` label for clock-in/out columns.
pub fn local_time_label(instant: DateTime<Utc>, timezone: &CompanyTimezone) -> String {
    instant.with_timezone(&timezone.tz()).format("%I:%M %p").to_string()
}

/// Parse an ISO-8601 timestamp from the backend into a UTC instant.
///
/// # Errors
/// Returns [`TimeError::InvalidInstant`] when the value is not RFC 3339.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, TimeError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| TimeError::InvalidInstant(value.to_string()))
}

/// Wire form sent back to the backend: `2025-01-15T14:30:00Z`.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Parse a date+time with no zone attached, as typed into a form or shown by
/// [`to_local_display`].
///
/// # Errors
/// Returns [`TimeError::InvalidWallClock`] when no accepted layout matches.
pub fn parse_wall_clock(value: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = value.trim();
    WALL_CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TimeError::InvalidWallClock(value.to_string()))
}

/// Convert what the clock reads in `timezone` into a UTC instant.
///
/// Repeated fall-back times resolve to the earlier instant. Times skipped by
/// a spring-forward transition are read with the offset in force before the
/// gap, so `02:30` on a US spring-forward day lands on `03:30` daylight time.
///
/// # Errors
/// Returns [`TimeError::InvalidWallClock`] when `value` cannot be parsed.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shiftclock_common::time::{local_wall_clock_to_utc, CompanyTimezone};
///
/// let tz = CompanyTimezone::parse("America/New_York").unwrap();
/// let utc = local_wall_clock_to_utc("2025-01-15T09:30", &tz).unwrap();
/// assert_eq!(utc, Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap());
/// ```
pub fn local_wall_clock_to_utc(
    value: &str,
    timezone: &CompanyTimezone,
) -> Result<DateTime<Utc>, TimeError> {
    let naive = parse_wall_clock(value)?;
    Ok(resolve_local(&timezone.tz(), &naive))
}

/// Offset-inference conversion used by the browser client.
///
/// Interprets `naive` in the `host` zone, looks at what that instant reads in
/// the company zone, and shifts by the difference between the two readings.
/// Passing `&chrono::Local` reproduces the browser exactly. It agrees with
/// [`local_wall_clock_to_utc`] except within a DST transition of either zone,
/// and is kept to check that agreement.
pub fn legacy_wall_clock_to_utc<H: TimeZone>(
    naive: &NaiveDateTime,
    timezone: &CompanyTimezone,
    host: &H,
) -> DateTime<Utc> {
    let naive_date = resolve_local(host, naive);
    let company_reading = naive_date.with_timezone(&timezone.tz()).naive_local();
    let company_date = resolve_local(host, &company_reading);
    let offset = naive_date - company_date;
    naive_date + offset
}

/// Render a session's calendar date.
///
/// A strict `YYYY-MM-DD` value is rendered from its digits alone, with no
/// timezone math, so it can never move to a neighbouring day. Otherwise the
/// `utc_fallback` instant is converted into `timezone` and its local date is
/// rendered. Failing both, the raw value (or an empty string) is returned.
///
/// # Examples
///
/// ```
/// use shiftclock_common::time::{format_calendar_date, CompanyTimezone, DateLocale};
///
/// let tz = CompanyTimezone::parse("Pacific/Kiritimati").unwrap();
/// let label = format_calendar_date(Some("2025-01-15"), &tz, None, DateLocale::UnitedStates);
/// assert_eq!(label, "Jan 15, 2025");
/// ```
pub fn format_calendar_date(
    session_date: Option<&str>,
    timezone: &CompanyTimezone,
    utc_fallback: Option<&str>,
    locale: DateLocale,
) -> String {
    if let Some(label) = session_date.and_then(|date| calendar_label(date, locale)) {
        return label;
    }

    if let Some(raw) = utc_fallback {
        match parse_instant(raw) {
            Ok(instant) => {
                let local = instant.with_timezone(&timezone.tz());
                if let Some(label) = locale.render(local.year(), local.month(), local.day()) {
                    return label;
                }
            }
            Err(_err) => {
                #[cfg(feature = "observability")]
                tracing::warn!(value = raw, error = %_err, "unparseable calendar date fallback");
            }
        }
    }

    session_date.unwrap_or_default().to_string()
}

fn calendar_label(value: &str, locale: DateLocale) -> Option<String> {
    if !CALENDAR_DATE_REGEX.is_match(value) {
        return None;
    }
    let year = value.get(0..4)?.parse().ok()?;
    let month = value.get(5..7)?.parse().ok()?;
    let day = value.get(8..10)?.parse().ok()?;
    locale.render(year, month, day)
}

/// Interpret a naive reading in `tz`, resolving DST folds and gaps.
fn resolve_local<T: TimeZone>(tz: &T, naive: &NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(local) | LocalResult::Ambiguous(local, _) => local.with_timezone(&Utc),
        LocalResult::None => {
            // Gap: transitions are never a day apart, so a day earlier carries
            // the pre-gap offset.
            let before = tz.offset_from_utc_datetime(&(*naive - Duration::days(1))).fix();
            let utc = *naive - Duration::seconds(i64::from(before.local_minus_utc()));
            Utc.from_utc_datetime(&utc)
        }
    }
}
