//! Utility functions for CLI operations.
//!
//! Configuration loading, data directory resolution, database access, and
//! input parsing shared across commands.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use hotel::reservation::parse_date;
use hotel::{init_logger, Config, ConfigBuilder, Database, DatabaseConfig, Logger};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` / `HOTEL_DATA_DIR`, else `~/.hotel`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref dir) => Ok(dir.clone()),
        None => hotel::database::resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration for the resolved data directory.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the logger (CLI flags first, then the configured log mode) and
/// route library diagnostics through it.
pub fn create_logger(global: &GlobalOptions, config: &Config) -> Logger {
    let logger = if global.verbose || global.quiet {
        init_logger(global.verbose, global.quiet)
    } else {
        config.log_level().map_or_else(|| init_logger(false, false), Logger::new)
    };
    logger.install();
    logger
}

/// Path of the database file for these options and configuration.
pub fn database_path(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    Ok(resolve_data_dir(global)?.join(config.database_file()))
}

/// Open the database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag, environment, or configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = database_path(global, config)?;

    if !db_path.exists() && (global.disable_autoinit || !config.autoinit_enabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.busy_timeout(), Duration::from_secs);

    Database::open(DatabaseConfig::new(db_path).with_busy_timeout(busy_timeout))
        .map_err(CliError::from)
}

/// Shorten a path for display.
///
/// Paths inside the home directory are shown as `~/...`.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// clap value parser for `YYYY-MM-DD` dates.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

/// clap value parser for nightly rates; rejects negative and non-finite values.
pub fn parse_rate_arg(value: &str) -> Result<f64, String> {
    let rate: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    validate_rate(rate)
}

/// Reject negative or non-finite rates.
pub fn validate_rate(rate: f64) -> Result<f64, String> {
    if !rate.is_finite() {
        return Err(format!("rate {rate} is not a finite number"));
    }
    if rate < 0.0 {
        return Err(format!("rate {rate} cannot be negative"));
    }
    Ok(rate)
}
