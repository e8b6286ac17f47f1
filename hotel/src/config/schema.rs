//! Configuration schema definitions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::database::DEFAULT_DATABASE_FILE;
use crate::logging::LogLevel;

/// Busy timeout used when no source sets one.
pub const DEFAULT_BUSY_TIMEOUT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so partial files can be layered; the accessor
/// methods supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, DatabaseSettings, OutputFormat};
///
/// let config = Config {
///     database: Some(DatabaseSettings {
///         file_name: Some("front-desk.db".to_string()),
///         busy_timeout_seconds: None,
///     }),
///     ..Default::default()
/// };
/// assert_eq!(config.database_file(), "front-desk.db");
/// assert_eq!(config.output_format(), OutputFormat::Table);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database file settings.
    pub database: Option<DatabaseSettings>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Console verbosity: quiet, normal, or verbose.
    pub log_mode: Option<String>,

    /// Output format for listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Database file name inside the data directory.
    #[must_use]
    pub fn database_file(&self) -> &str {
        self.database
            .as_ref()
            .and_then(|db| db.file_name.as_deref())
            .unwrap_or(DEFAULT_DATABASE_FILE)
    }

    /// Busy timeout for lock contention.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(
            self.database
                .as_ref()
                .and_then(|db| db.busy_timeout_seconds)
                .unwrap_or(DEFAULT_BUSY_TIMEOUT_SECONDS),
        )
    }

    /// Whether a missing database may be created on first use.
    #[must_use]
    pub fn autoinit_enabled(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }

    /// Configured log level, if any and valid.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }

    /// Listing format, defaulting to table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Database file settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// File name of the database inside the data directory.
    pub file_name: Option<String>,

    /// Maximum time to wait for a database lock, in seconds.
    pub busy_timeout_seconds: Option<u64>,
}

/// Output format for listings.
///
/// # Examples
///
/// ```
/// use hotel::config::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table with a header row.
    #[default]
    Table,
    /// JSON array.
    Json,
    /// CSV with a header row.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("invalid output format: {s} (expected table, json, or csv)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_file(), "hotel.db");
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
        assert!(config.autoinit_enabled());
        assert_eq!(config.log_level(), None);
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r"
database:
  file_name: desk.db
  busy_timeout_seconds: 30
disable_autoinit: true
log_mode: verbose
output_format: csv
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.database_file(), "desk.db");
        assert_eq!(config.busy_timeout(), Duration::from_secs(30));
        assert!(!config.autoinit_enabled());
        assert_eq!(config.log_level(), Some(LogLevel::Verbose));
        assert_eq!(config.output_format(), OutputFormat::Csv);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("rooms: 12\n");
        assert!(result.is_err());

        let result: Result<Config, _> = serde_yaml::from_str("database:\n  path: /tmp\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("TABLE".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
