//! Display row for one clock session
//!
//! Every string a session row shows, computed from one typed snapshot and
//! one reading of the clock.

use std::fmt;

use serde::{Deserialize, Serialize};
use shiftclock_common::time::{
    format_calendar_date, format_hms, format_instant, local_time_label, net_work_seconds,
    total_break_seconds, Clock, CompanyTimezone, DateLocale,
};
use shiftclock_domain::constants::PLACEHOLDER;
use shiftclock_domain::{ClockSession, Result, ShiftClockError};

/// Rendered strings of a session row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Backend session id
    pub session_id: u64,
    /// Calendar date label, e.g. `Jan 15, 2025`
    pub date: String,
    /// Clock-in time in company time, e.g. `09:00 AM`
    pub clock_in: String,
    /// Clock-out time, or the placeholder while the session is open
    pub clock_out: String,
    /// Net work as `HH:MM:SS`
    pub worked: String,
    /// Total break time as `HH:MM:SS`
    pub on_break: String,
    /// Human status label, e.g. `Working`
    pub status: String,
}

impl SessionView {
    /// Render `session` as seen from `timezone` at the clock's current time.
    ///
    /// The calendar label prefers the backend's `session_date`. Without one,
    /// the clock-in instant is converted into the company zone.
    pub fn render(
        session: &ClockSession,
        timezone: &CompanyTimezone,
        locale: DateLocale,
        clock: &dyn Clock,
    ) -> Self {
        let now = clock.now();
        let breaks = session.break_spans();
        let fallback = format_instant(session.clock_in);

        Self {
            session_id: session.id,
            date: format_calendar_date(
                session.session_date.as_deref(),
                timezone,
                Some(&fallback),
                locale,
            ),
            clock_in: local_time_label(session.clock_in, timezone),
            clock_out: session.clock_out.map_or_else(
                || PLACEHOLDER.to_string(),
                |out| local_time_label(out, timezone),
            ),
            worked: format_hms(net_work_seconds(
                session.clock_in,
                session.clock_out,
                breaks.iter().copied(),
                now,
            )),
            on_break: format_hms(total_break_seconds(breaks, now)),
            status: session.status.label().to_string(),
        }
    }

    /// Parse a backend session payload and render it.
    ///
    /// # Errors
    /// Returns [`ShiftClockError::InvalidInput`] when the payload is not a
    /// valid session, including malformed timestamps.
    pub fn from_json(
        json: &str,
        timezone: &CompanyTimezone,
        locale: DateLocale,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let session: ClockSession = serde_json::from_str(json)
            .map_err(|e| ShiftClockError::InvalidInput(format!("session payload: {e}")))?;
        Ok(Self::render(&session, timezone, locale, clock))
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | in {} | out {} | worked {} | break {} | {}",
            self.date, self.clock_in, self.clock_out, self.worked, self.on_break, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for display.
    use chrono::{TimeZone, Utc};
    use shiftclock_common::time::MockClock;

    use super::*;

    const ACTIVE_SESSION: &str = r#"{
        "id": 42,
        "session_date": "2025-01-15",
        "clock_in_time": "2025-01-15T14:00:00Z",
        "clock_out_time": null,
        "breaks": [
            { "break_start": "2025-01-15T14:30:00Z", "break_end": "2025-01-15T14:45:00Z" }
        ],
        "status": "active"
    }"#;

    fn new_york() -> CompanyTimezone {
        CompanyTimezone::parse("America/New_York").unwrap()
    }

    fn clock_at(hour: u32, minute: u32) -> MockClock {
        MockClock::at(Utc.with_ymd_and_hms(2025, 1, 15, hour, minute, 0).unwrap())
    }

    #[test]
    fn test_renders_open_session() {
        let view =
            SessionView::from_json(ACTIVE_SESSION, &new_york(), DateLocale::UnitedStates, &clock_at(15, 0))
                .unwrap();

        assert_eq!(view.session_id, 42);
        assert_eq!(view.date, "Jan 15, 2025");
        assert_eq!(view.clock_in, "09:00 AM");
        assert_eq!(view.clock_out, PLACEHOLDER);
        assert_eq!(view.worked, "00:45:00");
        assert_eq!(view.on_break, "00:15:00");
        assert_eq!(view.status, "Working");
        assert_eq!(
            view.to_string(),
            "Jan 15, 2025 | in 09:00 AM | out — | worked 00:45:00 | break 00:15:00 | Working"
        );
    }

    #[test]
    fn test_date_falls_back_to_company_local_clock_in() {
        // 02:00 UTC is still the previous evening in Los Angeles
        let json = r#"{
            "id": 7,
            "clock_in": "2025-01-15T02:00:00Z",
            "clock_out": "2025-01-15T06:00:00Z",
            "status": "completed"
        }"#;
        let tz = CompanyTimezone::parse("America/Los_Angeles").unwrap();
        let view =
            SessionView::from_json(json, &tz, DateLocale::International, &clock_at(12, 0)).unwrap();

        assert_eq!(view.date, "14 Jan 2025");
        assert_eq!(view.clock_in, "06:00 PM");
        assert_eq!(view.clock_out, "10:00 PM");
        assert_eq!(view.worked, "04:00:00");
        assert_eq!(view.on_break, "00:00:00");
        assert_eq!(view.status, "Completed");
    }

    #[test]
    fn test_malformed_payload_is_invalid_input() {
        let json = r#"{ "id": 1, "clock_in": "not-a-time", "status": "active" }"#;
        let err = SessionView::from_json(json, &new_york(), DateLocale::UnitedStates, &clock_at(9, 0))
            .unwrap_err();
        assert_eq!(err.label(), "invalid_input");
    }

    #[test]
    fn test_rendering_is_recomputed_from_the_clock() {
        let clock = clock_at(15, 0);
        let session: ClockSession = serde_json::from_str(ACTIVE_SESSION).unwrap();
        let first = SessionView::render(&session, &new_york(), DateLocale::UnitedStates, &clock);

        clock.advance(std::time::Duration::from_secs(90));
        let second = SessionView::render(&session, &new_york(), DateLocale::UnitedStates, &clock);

        assert_eq!(first.worked, "00:45:00");
        assert_eq!(second.worked, "00:46:30");
        assert_eq!(first.date, second.date);
    }
}
