//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the project configuration file in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "hotel.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user and project files.
///
/// # Examples
///
/// ```no_run
/// use hotel::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Looks for:
    /// 1. `config.yaml` in the data directory (precedence 1)
    /// 2. `hotel.yaml` in `working_dir` (precedence 2)
    ///
    /// When `data_dir` is `None` the resolved data directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        let user_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => crate::database::resolve_data_dir()?.join(USER_CONFIG_FILE),
        };
        if let Some(source) = Self::load_optional(user_path, 1)? {
            sources.push(source);
        }

        if let Some(source) = Self::load_optional(working_dir.join(PROJECT_CONFIG_FILE), 2)? {
            sources.push(source);
        }

        Ok(sources)
    }

    fn load_optional(path: PathBuf, precedence: u8) -> Result<Option<ConfigSource>> {
        if !path.exists() {
            return Ok(None);
        }

        log::debug!("loading configuration from {}", path.display());
        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// A file holding no keys (empty or comments only) yields the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str::<Option<Config>>(&contents)
            .map(Option::unwrap_or_default)
            .map_err(|e| Error::Validation {
                field: format!("{}", path.display()),
                message: format!("Invalid YAML: {e}"),
            })
    }
}
