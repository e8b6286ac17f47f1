//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, DatabaseSettings};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use hotel::config::{Config, ConfigMerger};
///
/// let low = Config { log_mode: Some("quiet".to_string()), ..Default::default() };
/// let high = Config { log_mode: Some("verbose".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.log_mode, Some("verbose".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources, given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target; set source fields win.
    ///
    /// Database settings merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_db) = source.database {
            target.database = Some(match &target.database {
                Some(target_db) => Self::merge_database(target_db, source_db),
                None => source_db.clone(),
            });
        }
    }

    fn merge_database(target: &DatabaseSettings, source: &DatabaseSettings) -> DatabaseSettings {
        DatabaseSettings {
            file_name: source.file_name.clone().or_else(|| target.file_name.clone()),
            busy_timeout_seconds: source.busy_timeout_seconds.or(target.busy_timeout_seconds),
        }
    }
}
