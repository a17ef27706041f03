//! Domain types and models
//!
//! Read-only snapshots of what the backend sends; nothing here is created or
//! mutated by the client.

pub mod session;

// Re-export session types for convenience
pub use session::{BreakInterval, BreakStatus, ClockSession, Interval, SessionStatus};
