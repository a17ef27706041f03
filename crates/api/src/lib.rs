//! # ShiftClock App
//!
//! Command-line front end: renders one clock session snapshot and follows
//! its live timers for a number of ticks.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shiftclock_common::time::Clock;
use shiftclock_core::{LiveTimer, SessionTimers, SessionView, WallClock};
use shiftclock_domain::{ClockSession, Config};
use tracing::{debug, info};

/// Command-line arguments of the `shiftclock` binary
#[derive(Debug, Clone, Parser)]
#[command(name = "shiftclock")]
#[command(about = "Render a clock session and follow its live timers")]
#[command(version)]
pub struct Args {
    /// Path to a session snapshot JSON file
    pub session: PathBuf,

    /// Number of ticks to print before exiting
    #[arg(long, default_value_t = 5)]
    pub ticks: u32,

    /// Config file (default: environment, then probed files)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Read and parse a session snapshot.
///
/// # Errors
/// Fails if the file cannot be read or is not a valid session payload.
pub fn load_session(path: &Path) -> anyhow::Result<ClockSession> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading session file {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing session file {}", path.display()))
}

/// Print the session row, then one live line per tick.
///
/// # Errors
/// Fails on invalid configuration, an unreadable session, a timer that
/// cannot be scheduled, or a failed write to `out`.
pub async fn run<W: Write>(
    args: &Args,
    config: &Config,
    clock: Arc<dyn Clock>,
    out: &mut W,
) -> anyhow::Result<()> {
    let timezone = config.company_timezone()?;
    let locale = config.date_locale();
    let period = config.tick_interval()?;

    let session = load_session(&args.session)?;
    info!(session_id = session.id, status = %session.status, timezone = %timezone, "session loaded");

    let view = SessionView::render(&session, &timezone, locale, clock.as_ref());
    writeln!(out, "{view}")?;

    let mut timers = SessionTimers::new(Arc::clone(&clock), period);
    timers.apply(&session)?;

    let mut wall = LiveTimer::with_period(Arc::clone(&clock), period);
    let header = WallClock::new(timezone);
    wall.update(header, header.is_running())?;
    let mut ticks = wall.subscribe();

    writeln!(out, "{}", live_line(&wall, &timers))?;
    for tick in 0..args.ticks {
        ticks.changed().await.context("wall clock stopped")?;
        writeln!(out, "{}", live_line(&wall, &timers))?;
        debug!(tick, "rendered live line");
    }

    wall.stop();
    timers.stop();
    Ok(())
}

fn live_line(wall: &LiveTimer, timers: &SessionTimers) -> String {
    format!(
        "{} | worked {} | break {}",
        wall.display(),
        timers.work().display(),
        timers.breaks().display()
    )
}
