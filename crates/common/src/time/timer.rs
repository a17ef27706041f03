//! Repeating ticker with explicit start/stop
//!
//! A [`Ticker`] owns at most one tokio task that invokes a callback once per
//! period. Starting again cancels the previous task first, and dropping the
//! ticker stops it, so a ticker can never leak a running schedule.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use super::error::TimeError;

/// Shared cancellation flag and firing counter of one running schedule
#[derive(Debug, Clone)]
pub struct TickerHandle {
    cancelled: Arc<AtomicBool>,
    fired: Arc<AtomicU64>,
}

impl TickerHandle {
    fn new() -> Self {
        Self { cancelled: Arc::new(AtomicBool::new(false)), fired: Arc::new(AtomicU64::new(0)) }
    }

    /// Cancel the schedule; the callback will not run again.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Number of times the callback has run.
    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::SeqCst)
    }
}

/// A repeating callback with an explicit lifecycle
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// use shiftclock_common::time::timer::Ticker;
///
/// #[tokio::main]
/// async fn main() {
///     let mut ticker = Ticker::new(Duration::from_secs(1));
///     ticker.start(|| println!("tick")).unwrap();
///
///     tokio::time::sleep(Duration::from_secs(5)).await;
///     ticker.stop();
/// }
/// ```
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    handle: Option<TickerHandle>,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    /// A stopped ticker that will fire every `period` once started.
    pub const fn new(period: Duration) -> Self {
        Self { period, handle: None, task: None }
    }

    /// Interval between firings.
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Start firing `callback` every period, first one period from now.
    ///
    /// Any schedule already running is cancelled first. Missed ticks are
    /// skipped rather than replayed in a burst.
    ///
    /// # Errors
    /// - [`TimeError::ZeroPeriod`] if the ticker was built with a zero period
    /// - [`TimeError::NoRuntime`] if called outside a tokio runtime
    pub fn start<F>(&mut self, mut callback: F) -> Result<TickerHandle, TimeError>
    where
        F: FnMut() + Send + 'static,
    {
        self.stop();

        if self.period.is_zero() {
            return Err(TimeError::ZeroPeriod);
        }
        let runtime = Handle::try_current().map_err(|_| TimeError::NoRuntime)?;

        let handle = TickerHandle::new();
        let task_handle = handle.clone();
        let period = self.period;
        let first_tick = Instant::now() + period;

        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(first_tick, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if task_handle.is_cancelled() {
                    break;
                }
                callback();
                task_handle.fired.fetch_add(1, Ordering::SeqCst);
            }
        });

        debug!(period_ms = period.as_millis() as u64, "ticker started");
        self.handle = Some(handle.clone());
        self.task = Some(task);
        Ok(handle)
    }

    /// Cancel the running schedule. Returns `false` if nothing was running.
    pub fn stop(&mut self) -> bool {
        let Some(handle) = self.handle.take() else {
            return false;
        };
        handle.cancel();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        debug!(fired = handle.fired(), "ticker stopped");
        true
    }

    /// Whether a schedule is active.
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Handle of the running schedule, if any.
    pub const fn handle(&self) -> Option<&TickerHandle> {
        self.handle.as_ref()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::timer.
    use std::sync::atomic::AtomicU32;

    use super::*;

    fn counting_callback() -> (Arc<AtomicU32>, impl FnMut() + Send + 'static) {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();
        (counter, move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_fires_once_per_period() {
        let (counter, callback) = counting_callback();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let handle = ticker.start(callback).unwrap();

        // Nothing fires immediately
        tokio::task::yield_now().await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);
        assert_eq!(handle.fired(), 3);
        assert!(ticker.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_ticker_never_fires_again() {
        let (counter, callback) = counting_callback();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        let handle = ticker.start(callback).unwrap();

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert!(ticker.stop());
        assert!(handle.is_cancelled());
        assert!(!ticker.is_running());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);

        // Second stop is a no-op
        assert!(!ticker.stop());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_schedule() {
        let (first_counter, first) = counting_callback();
        let (second_counter, second) = counting_callback();
        let mut ticker = Ticker::new(Duration::from_secs(1));

        let first_handle = ticker.start(first).unwrap();
        tokio::time::sleep(Duration::from_millis(1_500)).await;
        ticker.start(second).unwrap();
        assert!(first_handle.is_cancelled());

        tokio::time::sleep(Duration::from_millis(10_200)).await;
        assert_eq!(first_counter.load(Ordering::SeqCst), 1);
        assert_eq!(second_counter.load(Ordering::SeqCst), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_ticker_cancels_schedule() {
        let (counter, callback) = counting_callback();
        let handle = {
            let mut ticker = Ticker::new(Duration::from_secs(1));
            ticker.start(callback).unwrap()
        };
        assert!(handle.is_cancelled());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_period_is_rejected() {
        let mut ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.start(|| {}).unwrap_err(), TimeError::ZeroPeriod);
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_start_outside_runtime_is_an_error() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        assert_eq!(ticker.start(|| {}).unwrap_err(), TimeError::NoRuntime);
    }
}
