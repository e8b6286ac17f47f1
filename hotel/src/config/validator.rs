//! Configuration validation.

use crate::config::schema::{Config, DatabaseSettings};
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Longest accepted busy timeout, in seconds.
pub const MAX_BUSY_TIMEOUT_SECONDS: u64 = 3600;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref database) = config.database {
            Self::validate_database(database)?;
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }

    fn validate_database(database: &DatabaseSettings) -> Result<()> {
        if let Some(ref file_name) = database.file_name {
            if file_name.trim().is_empty() {
                return Err(Error::Validation {
                    field: "database.file_name".into(),
                    message: "File name cannot be empty".into(),
                });
            }
            if file_name.contains(['/', '\\']) {
                return Err(Error::Validation {
                    field: "database.file_name".into(),
                    message: format!("'{file_name}' must be a file name, not a path"),
                });
            }
        }

        if let Some(timeout) = database.busy_timeout_seconds {
            if timeout > MAX_BUSY_TIMEOUT_SECONDS {
                return Err(Error::Validation {
                    field: "database.busy_timeout_seconds".into(),
                    message: format!(
                        "Timeout {timeout}s exceeds the maximum of {MAX_BUSY_TIMEOUT_SECONDS}s"
                    ),
                });
            }
        }

        Ok(())
    }
}
