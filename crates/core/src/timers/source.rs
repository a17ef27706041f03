//! What a live timer shows
//!
//! A [`TimerSource`] turns "now" into a display string. The four flavors
//! cover every ticking value on the clocking screens.

use chrono::{DateTime, Utc};
use shiftclock_common::time::{
    elapsed_seconds, format_hms, net_work_seconds, to_local_display, total_break_seconds,
    CompanyTimezone, Span,
};
use shiftclock_domain::{ClockSession, SessionStatus};

/// Computes the display string of a live timer at a given instant
pub trait TimerSource: Send + Sync {
    /// Display at `now`, or `None` when there is no start instant yet.
    fn display(&self, now: DateTime<Utc>) -> Option<String>;
}

/// Elapsed time since one start instant, optionally capped at an end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstantTimer {
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl InstantTimer {
    /// Elapsed time from `start` to `end`, or to now while `end` is open.
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }
}

impl TimerSource for InstantTimer {
    fn display(&self, now: DateTime<Utc>) -> Option<String> {
        self.start.map(|start| format_hms(elapsed_seconds(start, self.end, now)))
    }
}

/// Net work time of a session: elapsed minus every break
///
/// Runs only while the session is `active`. When the status flips to
/// `on_break` the timer freezes on a value that already excludes earlier
/// breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkTimer {
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
    breaks: Vec<Span>,
    status: SessionStatus,
}

impl WorkTimer {
    /// Net work of a session from its raw parts.
    pub fn new(
        clock_in: Option<DateTime<Utc>>,
        clock_out: Option<DateTime<Utc>>,
        breaks: Vec<Span>,
        status: SessionStatus,
    ) -> Self {
        Self { clock_in, clock_out, breaks, status }
    }

    /// Net work timer for a backend snapshot.
    pub fn from_session(session: &ClockSession) -> Self {
        Self::new(Some(session.clock_in), session.clock_out, session.break_spans(), session.status)
    }

    /// Ticks only while the session is active.
    pub const fn is_running(&self) -> bool {
        self.clock_in.is_some() && self.status.work_running()
    }
}

impl TimerSource for WorkTimer {
    fn display(&self, now: DateTime<Utc>) -> Option<String> {
        let clock_in = self.clock_in?;
        let worked = net_work_seconds(clock_in, self.clock_out, self.breaks.iter().copied(), now);
        Some(format_hms(worked))
    }
}

/// Total break time of a session, running while `on_break`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakTimer {
    breaks: Vec<Span>,
    status: SessionStatus,
}

impl BreakTimer {
    /// Total of `breaks`, running while `status` is on break.
    pub fn new(breaks: Vec<Span>, status: SessionStatus) -> Self {
        Self { breaks, status }
    }

    /// Break total timer for a backend snapshot.
    pub fn from_session(session: &ClockSession) -> Self {
        Self::new(session.break_spans(), session.status)
    }

    /// Ticks only while on break with at least one break recorded.
    pub fn is_running(&self) -> bool {
        !self.breaks.is_empty() && self.status.break_running()
    }
}

impl TimerSource for BreakTimer {
    fn display(&self, now: DateTime<Utc>) -> Option<String> {
        if self.breaks.is_empty() {
            return None;
        }
        Some(format_hms(total_break_seconds(self.breaks.iter().copied(), now)))
    }
}

/// Current company-local date and time for the screen header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    timezone: CompanyTimezone,
}

impl WallClock {
    /// Header clock showing `timezone` local time.
    pub const fn new(timezone: CompanyTimezone) -> Self {
        Self { timezone }
    }

    /// The wall clock ticks unconditionally.
    pub const fn is_running(&self) -> bool {
        true
    }
}

impl TimerSource for WallClock {
    fn display(&self, now: DateTime<Utc>) -> Option<String> {
        Some(to_local_display(now, &self.timezone).to_string())
    }
}
