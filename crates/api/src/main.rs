//! ShiftClock - clock session viewer
//!
//! Main entry point for the `shiftclock` binary.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use shiftclock_app::{run, Args};
use shiftclock_common::time::{Clock, SystemClock};
use shiftclock_infra::{init_logging, load, load_from_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration; log the outcome once logging is up
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_from_file(Some(path.clone())),
        None => load(),
    }
    .context("loading configuration")?;

    init_logging(&config.logging).context("initialising logging")?;
    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
        Err(e) => tracing::debug!(error = %e, "No .env file loaded"),
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&args, &config, clock, &mut out).await
}
