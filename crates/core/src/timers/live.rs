//! Ticking display state machine
//!
//! A [`LiveTimer`] is `Idle` until its source has a start instant, `Frozen`
//! when it has one but is not running, and `Running` when it recomputes on
//! every tick. The latest display is published on a watch channel.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use shiftclock_common::time::{Clock, Ticker, TimeError};
use shiftclock_domain::constants::{DEFAULT_TICK_INTERVAL_MS, IDLE_DISPLAY};
use tokio::sync::watch;
use tracing::debug;

use super::source::TimerSource;

/// Lifecycle state of a [`LiveTimer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerState {
    /// No start instant; shows `00:00:00`
    Idle,
    /// Computed once, not ticking
    Frozen,
    /// Recomputed every tick
    Running,
}

impl TimerState {
    /// Lowercase label used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Frozen => "frozen",
            Self::Running => "running",
        }
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A display string that follows a [`TimerSource`] over time
///
/// Every [`update`](Self::update) cancels the previous schedule before
/// computing the new display, so at most one tick task is alive per timer.
/// Dropping the timer cancels it as well.
pub struct LiveTimer {
    clock: Arc<dyn Clock>,
    ticker: Ticker,
    state: TimerState,
    display: Arc<watch::Sender<String>>,
}

impl LiveTimer {
    /// Timer ticking at the default one-second period.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_period(clock, Duration::from_millis(DEFAULT_TICK_INTERVAL_MS))
    }

    /// Idle timer ticking every `period`.
    pub fn with_period(clock: Arc<dyn Clock>, period: Duration) -> Self {
        let (display, _) = watch::channel(IDLE_DISPLAY.to_string());
        Self {
            clock,
            ticker: Ticker::new(period),
            state: TimerState::Idle,
            display: Arc::new(display),
        }
    }

    /// Replace the source and running flag, restarting from scratch.
    ///
    /// The display is recomputed immediately. When `running` is set and the
    /// source has a start instant, it is recomputed again every period.
    ///
    /// # Errors
    /// Returns [`TimeError::NoRuntime`] or [`TimeError::ZeroPeriod`] if the
    /// tick schedule cannot be started. The display is still updated and the
    /// timer is left `Frozen`.
    pub fn update<S>(&mut self, source: S, running: bool) -> Result<TimerState, TimeError>
    where
        S: TimerSource + 'static,
    {
        self.ticker.stop();

        let Some(initial) = source.display(self.clock.now()) else {
            self.display.send_replace(IDLE_DISPLAY.to_string());
            self.state = TimerState::Idle;
            return Ok(self.state);
        };
        self.display.send_replace(initial);
        self.state = TimerState::Frozen;

        if running {
            let clock = Arc::clone(&self.clock);
            let display = Arc::clone(&self.display);
            self.ticker.start(move || {
                let value = source.display(clock.now()).unwrap_or_else(|| IDLE_DISPLAY.to_string());
                display.send_replace(value);
            })?;
            self.state = TimerState::Running;
        }

        debug!(state = %self.state, "live timer updated");
        Ok(self.state)
    }

    /// Stop ticking and keep the last display. Returns `false` if the timer
    /// was not running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.ticker.stop();
        if self.state == TimerState::Running {
            self.state = TimerState::Frozen;
        }
        stopped
    }

    /// Latest display value.
    pub fn display(&self) -> String {
        self.display.borrow().clone()
    }

    /// Receiver notified on every recomputation.
    /// Receiver notified on every published display value.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.display.subscribe()
    }

    /// Current state.
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Tick period.
    pub const fn period(&self) -> Duration {
        self.ticker.period()
    }

    /// Whether a tick task is currently scheduled.
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }
}

impl fmt::Debug for LiveTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveTimer")
            .field("state", &self.state)
            .field("display", &*self.display.borrow())
            .field("ticker", &self.ticker)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for timers::live.
    use chrono::{DateTime, TimeZone, Utc};
    use shiftclock_common::time::{CompanyTimezone, MockClock};

    use super::*;
    use crate::timers::source::{InstantTimer, WallClock};

    fn nine_am() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
    }

    fn timer_at(start: DateTime<Utc>) -> (MockClock, LiveTimer) {
        let clock = MockClock::at(start);
        let timer = LiveTimer::new(Arc::new(clock.clone()));
        (clock, timer)
    }

    /// Advance the wall clock by one second and let the next tick land.
    async fn one_tick(clock: &MockClock) {
        clock.advance(Duration::from_secs(1));
        tokio::time::sleep(Duration::from_millis(1_010)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_timer_ticks_every_second() {
        let (clock, mut timer) = timer_at(nine_am());

        let state = timer.update(InstantTimer::new(Some(nine_am()), None), true).unwrap();
        assert_eq!(state, TimerState::Running);
        assert_eq!(timer.display(), "00:00:00");

        for expected in ["00:00:01", "00:00:02", "00:00:03"] {
            one_tick(&clock).await;
            assert_eq!(timer.display(), expected);
        }
        assert!(timer.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_frozen_timer_never_changes() {
        let (clock, mut timer) = timer_at(nine_am() + chrono::Duration::seconds(42));

        let state = timer.update(InstantTimer::new(Some(nine_am()), None), false).unwrap();
        assert_eq!(state, TimerState::Frozen);
        assert_eq!(timer.display(), "00:00:42");

        clock.advance(Duration::from_secs(3_600));
        tokio::time::sleep(Duration::from_secs(3_600)).await;
        assert_eq!(timer.display(), "00:00:42");
        assert!(!timer.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_start_is_idle_even_when_running() {
        let (clock, mut timer) = timer_at(nine_am());

        let state = timer.update(InstantTimer::default(), true).unwrap();
        assert_eq!(state, TimerState::Idle);
        assert_eq!(timer.display(), IDLE_DISPLAY);
        assert!(!timer.is_ticking());

        one_tick(&clock).await;
        assert_eq!(timer.display(), IDLE_DISPLAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_cancels_previous_schedule() {
        let (clock, mut timer) = timer_at(nine_am());
        timer.update(InstantTimer::new(Some(nine_am()), None), true).unwrap();
        one_tick(&clock).await;
        assert_eq!(timer.display(), "00:00:01");

        let end = nine_am() + chrono::Duration::seconds(5);
        let state = timer.update(InstantTimer::new(Some(nine_am()), Some(end)), false).unwrap();
        assert_eq!(state, TimerState::Frozen);
        assert_eq!(timer.display(), "00:00:05");

        // A leaked schedule would overwrite the frozen value with the open one
        for _ in 0..10 {
            one_tick(&clock).await;
        }
        assert_eq!(timer.display(), "00:00:05");
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_keeps_last_value() {
        let (clock, mut timer) = timer_at(nine_am());
        timer.update(InstantTimer::new(Some(nine_am()), None), true).unwrap();
        one_tick(&clock).await;
        one_tick(&clock).await;

        assert!(timer.stop());
        assert_eq!(timer.state(), TimerState::Frozen);
        assert!(!timer.stop());

        one_tick(&clock).await;
        assert_eq!(timer.display(), "00:00:02");
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_each_tick() {
        let (clock, mut timer) = timer_at(nine_am());
        let mut rx = timer.subscribe();

        timer.update(InstantTimer::new(Some(nine_am()), None), true).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "00:00:00");

        clock.advance(Duration::from_secs(1));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), "00:00:01");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_timer_closes_display_channel() {
        let (_clock, mut timer) = timer_at(nine_am());
        let mut rx = timer.subscribe();
        timer.update(InstantTimer::new(Some(nine_am()), None), true).unwrap();
        let _ = rx.borrow_and_update();

        drop(timer);

        let closed = tokio::time::timeout(Duration::from_secs(5), rx.changed()).await;
        assert!(matches!(closed, Ok(Err(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_clock_ticks_in_company_time() {
        let (clock, mut timer) = timer_at(Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).unwrap());
        let wall = WallClock::new(CompanyTimezone::parse("America/New_York").unwrap());

        timer.update(wall, wall.is_running()).unwrap();
        assert_eq!(timer.display(), "01/15/2025, 09:30:00 AM");

        one_tick(&clock).await;
        assert_eq!(timer.display(), "01/15/2025, 09:30:01 AM");
    }

    #[test]
    fn test_running_outside_runtime_freezes() {
        let (_clock, mut timer) = timer_at(nine_am());
        let err = timer.update(InstantTimer::new(Some(nine_am()), None), true).unwrap_err();
        assert_eq!(err, TimeError::NoRuntime);
        assert_eq!(timer.state(), TimerState::Frozen);
        assert_eq!(timer.display(), "00:00:00");
    }
}
