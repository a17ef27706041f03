//! Elapsed-time arithmetic for clock sessions
//!
//! All functions take `now` explicitly so a caller reads the clock once per
//! render and every figure on screen agrees with the others.

use chrono::{DateTime, Utc};

/// A start instant and an optional end; `None` means "still running".
pub type Span = (DateTime<Utc>, Option<DateTime<Utc>>);

/// Whole seconds from `start` to `end` (or `now` when `end` is `None`).
///
/// Rounds toward negative infinity. A start later than the end yields a
/// negative value; it is passed through unclamped so callers can detect bad
/// backend data.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use shiftclock_common::time::elapsed_seconds;
///
/// let start = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
/// let end = start + Duration::milliseconds(1_999);
/// assert_eq!(elapsed_seconds(start, Some(end), end), 1);
/// assert_eq!(elapsed_seconds(end, Some(start), end), -2);
/// ```
pub fn elapsed_seconds(
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> i64 {
    let end = end.unwrap_or(now);
    (end - start).num_milliseconds().div_euclid(1000)
}

/// Sum of [`elapsed_seconds`] over every break. Empty input yields 0.
pub fn total_break_seconds<I>(breaks: I, now: DateTime<Utc>) -> i64
where
    I: IntoIterator<Item = Span>,
{
    breaks.into_iter().map(|(start, end)| elapsed_seconds(start, end, now)).sum()
}

/// Elapsed session time minus all breaks, never below zero.
///
/// Breaks can exceed the session window through clock skew or racing
/// updates upstream; the result is clamped rather than shown negative.
pub fn net_work_seconds<I>(
    clock_in: DateTime<Utc>,
    clock_out: Option<DateTime<Utc>>,
    breaks: I,
    now: DateTime<Utc>,
) -> i64
where
    I: IntoIterator<Item = Span>,
{
    let elapsed = elapsed_seconds(clock_in, clock_out, now);
    (elapsed - total_break_seconds(breaks, now)).max(0)
}
