//! Explicit initialization of the data directory and database.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::loader::USER_CONFIG_FILE;
use crate::database::DEFAULT_DATABASE_FILE;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Database file name inside the data directory.
    pub database_file: String,
    /// Replace an existing database.
    pub overwrite: bool,
    /// Write a commented configuration file if none exists.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates options for `data_dir` with the default database file name.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets the database file name.
    #[must_use]
    pub fn with_database_file(mut self, file_name: impl Into<String>) -> Self {
        self.database_file = file_name.into();
        self
    }

    /// Sets whether to overwrite an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create the default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Path of the database file these options target.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}

/// Outcome of [`init_database`].
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was written.
    pub config_created: bool,
    /// Path to the database file.
    pub database_path: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# Hotel console configuration
# Every key is optional; uncomment to change a default.

# database:
#   file_name: hotel.db
#   busy_timeout_seconds: 5

# Refuse to create the database implicitly (run `hotel init` instead)
# disable_autoinit: false

# quiet, normal, or verbose
# log_mode: normal

# table, json, or csv
# output_format: table
";

/// Creates the data directory and an empty, schema-initialized database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is false
/// - The database cannot be opened or initialized
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use hotel::init::{init_database, InitOptions};
///
/// let options = InitOptions::new("/tmp/hotel-data").with_create_config(true);
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        database_path: options.database_path(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.database_path();
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "Database already exists at {}. Use --overwrite to replace it.",
                    db_path.display()
                ),
            });
        }
        remove_database_files(&db_path)?;
    }

    Database::open(DatabaseConfig::new(&db_path))?.close()?;
    result.database_created = true;
    log::debug!("initialized database at {}", db_path.display());

    if options.create_config {
        let config_path = options.data_dir.join(USER_CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

/// Removes the database file and its WAL sidecars.
fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        let sidecar = PathBuf::from(sidecar);
        if sidecar.exists() {
            fs::remove_file(sidecar)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigLoader};
    use crate::Room;
    use tempfile::TempDir;

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("hotel");

        let result = init_database(&InitOptions::new(&data_dir)).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert!(data_dir.join("hotel.db").exists());
    }

    #[test]
    fn test_init_custom_file_name() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions::new(temp.path()).with_database_file("desk.db");

        let result = init_database(&options).unwrap();
        assert!(!result.data_dir_created);
        assert_eq!(result.database_path, temp.path().join("desk.db"));
        assert!(result.database_path.exists());
    }

    #[test]
    fn test_init_with_config_template_parses() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions::new(temp.path()).with_create_config(true);

        let result = init_database(&options).unwrap();
        assert!(result.config_created);

        let path = temp.path().join("config.yaml");
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Hotel console configuration"));
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_fails_without_overwrite() {
        let temp = TempDir::new().unwrap();
        init_database(&InitOptions::new(temp.path())).unwrap();

        match init_database(&InitOptions::new(temp.path())) {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "database");
                assert!(message.contains("already exists"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_init_overwrite_discards_data() {
        let temp = TempDir::new().unwrap();
        let options = InitOptions::new(temp.path());
        init_database(&options).unwrap();

        let mut db = Database::open(DatabaseConfig::new(options.database_path())).unwrap();
        db.insert_room(&Room::standard(101, 100.0)).unwrap();
        db.close().unwrap();

        init_database(&options.clone().with_overwrite(true)).unwrap();

        let db = Database::open(DatabaseConfig::new(options.database_path())).unwrap();
        assert!(Database::list_rooms(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_init_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        fs::write(&config_path, "log_mode: quiet\n").unwrap();

        let result = init_database(&InitOptions::new(temp.path()).with_create_config(true)).unwrap();

        assert!(!result.config_created);
        assert_eq!(fs::read_to_string(&config_path).unwrap(), "log_mode: quiet\n");
    }
}
