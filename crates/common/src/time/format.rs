//! Clock-face duration formatting
//!
//! Live timers show `HH:MM:SS`. Hours are never wrapped: a session left
//! running over a weekend reads `62:10:05`, not `14:10:05`.

/// Format whole seconds as zero-padded `HH:MM:SS`.
///
/// Minutes and seconds are always two digits, hours at least two. Negative
/// input (bad upstream data) keeps its sign so it stays visible.
///
/// # Examples
///
/// ```
/// use shiftclock_common::time::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(3661), "01:01:01");
/// assert_eq!(format_hms(359_999), "99:59:59");
/// assert_eq!(format_hms(360_000), "100:00:00");
/// assert_eq!(format_hms(-5), "-00:00:05");
/// ```
pub fn format_hms(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{sign}{hours:02}:{minutes:02}:{secs:02}")
}

/// [`format_hms`] for values that may be missing, falling back to
/// `placeholder`.
pub fn format_hms_or_placeholder(seconds: Option<i64>, placeholder: &str) -> String {
    seconds.map_or_else(|| placeholder.to_string(), format_hms)
}
