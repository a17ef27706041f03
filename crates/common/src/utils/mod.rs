//! Common utility functions
//!
//! - **[`serde`]**: Serialization helpers for wire timestamps

pub mod serde;

// Re-export commonly used items for convenience
pub use self::serde::utc_instant;
