//! Integration tests for the configuration system.
//!
//! Tests that modify environment variables are marked with `#[serial]`.

use std::env;
use std::fs;
use std::path::Path;

use serial_test::serial;
use tempfile::TempDir;

use hotel::config::{Config, ConfigBuilder, OutputFormat};
use hotel::error::Error;
use hotel::init::{init_database, InitOptions};
use hotel::{Database, DatabaseConfig, LogLevel};

/// RAII guard for setting and restoring an environment variable.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn test_layered_files() {
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(
        data_dir.path(),
        "config.yaml",
        "output_format: json\nlog_mode: quiet\n",
    );
    write(work_dir.path(), "hotel.yaml", "log_mode: verbose\n");

    let config = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_working_dir(work_dir.path())
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.output_format(), OutputFormat::Json);
    assert_eq!(config.log_level(), Some(LogLevel::Verbose));
}

#[test]
fn test_unknown_key_is_an_error() {
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(work_dir.path(), "hotel.yaml", "rooms_per_floor: 10\n");

    let err = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_working_dir(work_dir.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
#[serial]
fn test_environment_beats_files() {
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(
        work_dir.path(),
        "hotel.yaml",
        "database:\n  file_name: project.db\ndisable_autoinit: false\n",
    );

    let _file = EnvGuard::set("HOTEL_DATABASE_FILE", "env.db");
    let _autoinit = EnvGuard::set("HOTEL_DISABLE_AUTOINIT", "true");

    let config = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_working_dir(work_dir.path())
        .build()
        .unwrap();

    assert_eq!(config.database_file(), "env.db");
    assert!(!config.autoinit_enabled());
}

#[test]
#[serial]
fn test_invalid_environment_value() {
    let _timeout = EnvGuard::set("HOTEL_BUSY_TIMEOUT", "7200");

    let result = ConfigBuilder::new().skip_files().build();
    assert!(result.is_err());
}

#[test]
fn test_config_drives_database_location() {
    let data_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    write(
        data_dir.path(),
        "config.yaml",
        "database:\n  file_name: desk.db\n  busy_timeout_seconds: 2\n",
    );

    let config: Config = ConfigBuilder::new()
        .with_data_dir(data_dir.path())
        .with_working_dir(work_dir.path())
        .skip_env()
        .build()
        .unwrap();

    let options = InitOptions::new(data_dir.path()).with_database_file(config.database_file());
    let result = init_database(&options).unwrap();
    assert_eq!(result.database_path, data_dir.path().join("desk.db"));

    let db = Database::open(
        DatabaseConfig::new(&result.database_path)
            .with_busy_timeout(config.busy_timeout())
            .with_auto_create(false),
    )
    .unwrap();
    assert_eq!(db.config().busy_timeout.as_secs(), 2);
}
