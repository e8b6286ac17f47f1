//! Environment variable handling for configuration overrides.
//!
//! `HOTEL_*` variables override values from configuration files.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LOG_MODE_ENV;

/// Overrides the database file name.
pub const DATABASE_FILE_ENV: &str = "HOTEL_DATABASE_FILE";
/// Overrides the busy timeout, in seconds.
pub const BUSY_TIMEOUT_ENV: &str = "HOTEL_BUSY_TIMEOUT";
/// Disables automatic database initialization.
pub const DISABLE_AUTOINIT_ENV: &str = "HOTEL_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use hotel::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (non-numeric
    /// timeout, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(file_name) = env::var(DATABASE_FILE_ENV) {
            config
                .database
                .get_or_insert_with(Default::default)
                .file_name = Some(file_name);
        }

        if let Ok(seconds) = env::var(BUSY_TIMEOUT_ENV) {
            let seconds = seconds.trim().parse().map_err(|_| Error::Validation {
                field: BUSY_TIMEOUT_ENV.into(),
                message: "Must be a non-negative integer".into(),
            })?;
            config
                .database
                .get_or_insert_with(Default::default)
                .busy_timeout_seconds = Some(seconds);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(mode);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: [&str; 4] = [
        DATABASE_FILE_ENV,
        BUSY_TIMEOUT_ENV,
        DISABLE_AUTOINIT_ENV,
        LOG_MODE_ENV,
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_all_overrides() {
        clear_env();
        env::set_var(DATABASE_FILE_ENV, "other.db");
        env::set_var(BUSY_TIMEOUT_ENV, "12");
        env::set_var(DISABLE_AUTOINIT_ENV, "yes");
        env::set_var(LOG_MODE_ENV, "quiet");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.database_file(), "other.db");
        assert_eq!(config.busy_timeout().as_secs(), 12);
        assert!(!config.autoinit_enabled());
        assert_eq!(config.log_mode.as_deref(), Some("quiet"));
    }

    #[test]
    #[serial]
    fn test_invalid_timeout() {
        clear_env();
        env::set_var(BUSY_TIMEOUT_ENV, "soon");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    #[serial]
    fn test_invalid_bool() {
        clear_env();
        env::set_var(DISABLE_AUTOINIT_ENV, "maybe");
        let result = EnvironmentConfig::apply_overrides(&mut Config::default());
        clear_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bool_variants() {
        for value in ["true", "1", "YES", "On"] {
            assert!(EnvironmentConfig::parse_bool("x", value).unwrap());
        }
        for value in ["false", "0", "no", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("x", value).unwrap());
        }
    }
}
