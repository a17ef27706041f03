//! Logging infrastructure
//!
//! Installs the process-wide `tracing` subscriber from [`LoggingConfig`].
//!
//! [`LoggingConfig`]: shiftclock_domain::LoggingConfig

pub mod logging;

pub use logging::{build_filter, init_logging};
