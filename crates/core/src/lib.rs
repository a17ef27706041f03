//! # ShiftClock Core
//!
//! Clocking display logic on top of the pure time utilities.
//!
//! This crate contains:
//! - Live timers that re-render once per tick while running
//! - The per-session display row and its timers
//! - The correction workflow that turns company-local edits into UTC payloads
//!
//! ## Architecture Principles
//! - Only depends on `shiftclock-common` and `shiftclock-domain`
//! - No I/O: every input is a typed backend snapshot or a wall-clock string
//! - "Now" always comes from an injected [`Clock`](shiftclock_common::Clock)

pub mod correction;
pub mod display;
pub mod timers;

pub use correction::{CorrectionDraft, CorrectionRequest};
pub use display::SessionView;
pub use timers::{
    BreakTimer, InstantTimer, LiveTimer, SessionTimers, TimerSource, TimerState, WallClock,
    WorkTimer,
};
