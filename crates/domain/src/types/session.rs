//! Clock session types
//!
//! A clock session is one employee's working day: a clock-in instant, an
//! optional clock-out, and the breaks taken in between. The backend pushes a
//! fresh snapshot whenever any of these change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shiftclock_common::time::Span;

use crate::impl_domain_status_conversions;

/// A start instant plus an optional end; `end = None` means ongoing.
///
/// `end >= start` is expected of backend data but not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// When the interval began
    pub start: DateTime<Utc>,
    /// When it ended, `None` while ongoing
    pub end: Option<DateTime<Utc>>,
}

impl Interval {
    /// Interval from `start` to an optional `end`.
    pub const fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Interval that is still running.
    pub const fn open(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Interval that has ended.
    pub const fn closed(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end: Some(end) }
    }

    /// Whether no end has been recorded yet.
    pub const fn is_ongoing(&self) -> bool {
        self.end.is_none()
    }

    /// `(start, end)` pair consumed by the elapsed-time calculators.
    pub const fn span(&self) -> Span {
        (self.start, self.end)
    }
}

/// Clocking status of a whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    OnBreak,
    Completed,
}

impl_domain_status_conversions!(SessionStatus {
    Active => "active",
    OnBreak => "on_break",
    Completed => "completed",
});

impl SessionStatus {
    /// Human label shown next to the timers.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Working",
            Self::OnBreak => "On break",
            Self::Completed => "Completed",
        }
    }

    /// The work timer advances only while the employee is working.
    pub const fn work_running(self) -> bool {
        matches!(self, Self::Active)
    }

    /// The break timer advances only while a break is in progress.
    pub const fn break_running(self) -> bool {
        matches!(self, Self::OnBreak)
    }
}

/// Status of a single break record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakStatus {
    Active,
    Completed,
}

impl_domain_status_conversions!(BreakStatus {
    Active => "active",
    Completed => "completed",
});

/// A pause in work inside a clock session.
///
/// Breaks of one session are assumed not to overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// Backend break id
    #[serde(default)]
    pub id: Option<u64>,
    /// Break start
    #[serde(alias = "break_start")]
    pub start: DateTime<Utc>,
    /// Break end, `None` while on break
    #[serde(default, alias = "break_end")]
    pub end: Option<DateTime<Utc>>,
    /// Status as sent by the backend
    #[serde(default)]
    pub status: Option<BreakStatus>,
}

impl BreakInterval {
    /// The break as a plain interval.
    pub const fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    /// Explicit status when the backend sent one, otherwise derived from the
    /// end instant.
    pub const fn status(&self) -> BreakStatus {
        match (self.status, self.end) {
            (Some(status), _) => status,
            (None, None) => BreakStatus::Active,
            (None, Some(_)) => BreakStatus::Completed,
        }
    }
}

/// One employee's clock session as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSession {
    /// Backend session id
    pub id: u64,
    /// Owning employee, when the backend includes it
    #[serde(default)]
    pub employee_id: Option<u64>,
    /// Calendar date of the session (`YYYY-MM-DD`), no time component
    #[serde(default)]
    pub session_date: Option<String>,
    /// Clock-in instant
    #[serde(alias = "clock_in_time")]
    pub clock_in: DateTime<Utc>,
    /// Clock-out instant, `None` while the session is open
    #[serde(default, alias = "clock_out_time")]
    pub clock_out: Option<DateTime<Utc>>,
    /// Breaks taken during the session
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    /// Lifecycle status
    pub status: SessionStatus,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl ClockSession {
    /// Clock-in to clock-out (or ongoing).
    pub const fn work_interval(&self) -> Interval {
        Interval::new(self.clock_in, self.clock_out)
    }

    /// Every break as a plain interval.
    pub fn break_intervals(&self) -> Vec<Interval> {
        self.breaks.iter().map(BreakInterval::interval).collect()
    }

    /// Every break as a calculator span.
    pub fn break_spans(&self) -> Vec<Span> {
        self.breaks.iter().map(|b| b.interval().span()).collect()
    }

    /// The break currently in progress, if any.
    pub fn active_break(&self) -> Option<&BreakInterval> {
        self.breaks.iter().find(|b| b.status() == BreakStatus::Active)
    }
}
