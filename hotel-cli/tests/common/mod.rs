//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads; cleared so the host cannot leak in.
const HOTEL_ENV_VARS: [&str; 5] = [
    "HOTEL_DATA_DIR",
    "HOTEL_BUSY_TIMEOUT",
    "HOTEL_DISABLE_AUTOINIT",
    "HOTEL_DATABASE_FILE",
    "HOTEL_LOG_MODE",
];

/// Test environment with an isolated data directory.
///
/// The data directory is not created up front; the binary creates it on
/// first use unless auto-init is disabled.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, also used as the working directory.
    pub temp_path: PathBuf,
    /// Path to the hotel data directory.
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("hotel-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The `hotel` binary with a clean environment and no `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("hotel").expect("Failed to find hotel binary");
        for var in HOTEL_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// The `hotel` binary pointed at this environment's data directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("hotel.db")
    }

    /// Runs a command that must succeed and returns its stdout.
    pub fn run(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run hotel");
        assert!(
            output.status.success(),
            "hotel {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    pub fn add_room(&self, number: u32, category: &str, rate: &str) {
        self.run(&[
            "room",
            "add",
            "--number",
            &number.to_string(),
            "--category",
            category,
            "--rate",
            rate,
        ]);
    }

    pub fn register_client(&self, national_id: &str, first_names: &str, last_names: &str) {
        self.run(&[
            "client",
            "register",
            "--national-id",
            national_id,
            "--first-names",
            first_names,
            "--last-names",
            last_names,
        ]);
    }

    pub fn book(&self, national_id: &str, room: u32, check_in: &str, check_out: &str) -> String {
        self.run(&[
            "reservation",
            "book",
            "--national-id",
            national_id,
            "--room",
            &room.to_string(),
            "--check-in",
            check_in,
            "--check-out",
            check_out,
        ])
    }

    /// Rooms as parsed from `room list --format json`.
    pub fn rooms_json(&self) -> Vec<serde_json::Value> {
        let stdout = self.run(&["room", "list", "--format", "json"]);
        serde_json::from_str(&stdout).expect("room list did not print JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
