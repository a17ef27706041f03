//! # ShiftClock Domain
//!
//! Backend snapshot types and models for the ShiftClock time-clocking core.
//!
//! This crate contains:
//! - Clock session data (sessions, breaks, intervals, statuses)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - Depends only on the foundation tier of `shiftclock-common`
//! - Only external dependencies allowed
//! - Pure domain models and data structures; the backend owns the data

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
