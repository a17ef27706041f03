//! Work and break timers of one clock session

use std::sync::Arc;
use std::time::Duration;

use shiftclock_common::time::{Clock, TimeError};
use shiftclock_domain::ClockSession;
use tracing::debug;

use super::live::LiveTimer;
use super::source::{BreakTimer, WorkTimer};

/// The pair of live timers shown for a clock session
///
/// Every snapshot pushed by the backend is passed to [`apply`](Self::apply),
/// which re-derives both timers and their running flags from scratch.
#[derive(Debug)]
pub struct SessionTimers {
    work: LiveTimer,
    breaks: LiveTimer,
}

impl SessionTimers {
    /// Two idle timers reading `clock` and ticking every `period`.
    pub fn new(clock: Arc<dyn Clock>, period: Duration) -> Self {
        Self {
            work: LiveTimer::with_period(Arc::clone(&clock), period),
            breaks: LiveTimer::with_period(clock, period),
        }
    }

    /// Recompute both timers from a fresh session snapshot.
    ///
    /// Both timers are updated even when one of them fails to schedule.
    ///
    /// # Errors
    /// Propagates the first [`TimeError`] when a running timer cannot be
    /// scheduled.
    pub fn apply(&mut self, session: &ClockSession) -> Result<(), TimeError> {
        let work = WorkTimer::from_session(session);
        let work_running = work.is_running();
        let work_result = self.work.update(work, work_running);

        let breaks = BreakTimer::from_session(session);
        let break_running = breaks.is_running();
        let break_result = self.breaks.update(breaks, break_running);

        debug!(
            session_id = session.id,
            status = %session.status,
            work = %self.work.state(),
            breaks = %self.breaks.state(),
            "session timers applied"
        );
        work_result.and(break_result).map(|_| ())
    }

    /// Net work timer.
    pub const fn work(&self) -> &LiveTimer {
        &self.work
    }

    /// Total break timer.
    pub const fn breaks(&self) -> &LiveTimer {
        &self.breaks
    }

    /// Stop both timers, keeping their last values.
    pub fn stop(&mut self) {
        self.work.stop();
        self.breaks.stop();
    }
}
