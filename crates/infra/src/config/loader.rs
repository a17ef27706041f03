//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variable is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! Whatever the source, the result is validated before it is returned.
//!
//! ## Environment Variables
//! - `SHIFTCLOCK_COMPANY_TIMEZONE`: IANA zone of the company (required)
//! - `SHIFTCLOCK_LOCALE`: Locale tag for calendar dates (default `en-US`)
//! - `SHIFTCLOCK_TICK_INTERVAL`: Live timer period (default `1s`)
//! - `SHIFTCLOCK_LOG_LEVEL`: Log level or filter directives (default `info`)
//! - `SHIFTCLOCK_LOG_JSON`: Whether logs are JSON lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./shiftclock.json` or `./shiftclock.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use shiftclock_domain::constants::{
    DEFAULT_LOCALE, DEFAULT_LOG_LEVEL, DEFAULT_TICK_INTERVAL, ENV_COMPANY_TIMEZONE, ENV_LOCALE,
    ENV_LOG_JSON, ENV_LOG_LEVEL, ENV_TICK_INTERVAL,
};
use shiftclock_domain::{
    CompanyConfig, Config, LoggingConfig, Result, ShiftClockError, TimerConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `ShiftClockError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
///
/// Returns `ShiftClockError::Time` if the company timezone is unknown.
pub fn load() -> Result<Config> {
    match std::env::var(ENV_COMPANY_TIMEZONE) {
        Ok(_) => {
            let config = load_from_env()?;
            tracing::info!(
                timezone = %config.company.timezone,
                "Configuration loaded from environment variables"
            );
            Ok(config)
        }
        Err(_) => {
            tracing::debug!(var = ENV_COMPANY_TIMEZONE, "Not set, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only the company timezone is required; every other variable falls back
/// to its default.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `ShiftClockError::Config` if the timezone variable is missing or
/// a value is invalid, `ShiftClockError::Time` if the zone is unknown.
pub fn load_from_env() -> Result<Config> {
    let timezone = env_var(ENV_COMPANY_TIMEZONE)?;
    let locale = env_or(ENV_LOCALE, DEFAULT_LOCALE);
    let tick_interval = env_or(ENV_TICK_INTERVAL, DEFAULT_TICK_INTERVAL);
    let level = env_or(ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
    let json = env_bool(ENV_LOG_JSON, false);

    let config = Config {
        company: CompanyConfig { timezone, locale },
        timer: TimerConfig { tick_interval },
        logging: LoggingConfig { level, json },
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `ShiftClockError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShiftClockError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShiftClockError::Config(format!(
                "{ENV_COMPANY_TIMEZONE} is not set and no config file was found in any of the \
                 standard locations"
            ))
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShiftClockError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `ShiftClockError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShiftClockError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShiftClockError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShiftClockError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./shiftclock.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    probe_in(&roots)
}

/// First existing candidate under `roots`, in probe order.
fn probe_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots.iter().flat_map(|root| candidates(root)).find(|path| path.exists())
}

fn candidates(root: &Path) -> Vec<PathBuf> {
    vec![
        root.join("config.json"),
        root.join("config.toml"),
        root.join("shiftclock.json"),
        root.join("shiftclock.toml"),
        root.join("../config.json"),
        root.join("../config.toml"),
        root.join("../../config.json"),
        root.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `ShiftClockError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            ShiftClockError::Config(format!("Missing required environment variable: {key}"))
        })
}

/// Optional environment variable with a default
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
