//! # ShiftClock Infrastructure
//!
//! The impure edges of the time-clocking core.
//!
//! This crate contains:
//! - Configuration loading (environment variables, JSON/TOML files)
//! - Logging initialisation
//!
//! ## Architecture
//! - Depends on `shiftclock-domain` for the configuration types
//! - Contains all code that touches the process environment or filesystem

pub mod config;
pub mod observability;

// Re-export commonly used items
pub use config::{load, load_from_env, load_from_file, probe_config_paths};
pub use observability::init_logging;

/// Serialises tests that read or write process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: once_cell::sync::Lazy<std::sync::Mutex<()>> =
    once_cell::sync::Lazy::new(|| std::sync::Mutex::new(()));
