//! Live timers for the clocking screens
//!
//! - [`source`]: what a timer shows ([`TimerSource`] and its four flavors)
//! - [`live`]: the tick-driven [`LiveTimer`] state machine
//! - [`session`]: the work/break timer pair of one clock session

pub mod live;
pub mod session;
pub mod source;

pub use live::{LiveTimer, TimerState};
pub use session::SessionTimers;
pub use source::{BreakTimer, InstantTimer, TimerSource, WallClock, WorkTimer};
