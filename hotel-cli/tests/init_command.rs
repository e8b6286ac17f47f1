//! Integration tests for `init`, `show-data-dir` and auto-initialization.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_init_fresh_directory() {
    let env = TestEnv::new();
    assert!(!env.data_dir.exists());

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized hotel data"))
        .stdout(predicate::str::contains("Created data directory"))
        .stdout(predicate::str::contains("Created database"));

    assert!(env.database_path().exists());
    assert!(!env.data_dir.join("config.yaml").exists());
}

#[test]
fn test_init_existing_database_requires_overwrite() {
    let env = TestEnv::new();
    env.add_room(101, "Standard", "100");

    env.command()
        .arg("init")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--overwrite"));

    env.command().args(["init", "--overwrite"]).assert().success();
    assert!(env.rooms_json().is_empty());
}

#[test]
fn test_init_with_config_writes_loadable_template() {
    let env = TestEnv::new();

    env.command().args(["init", "--with-config"]).assert().success();
    let config_path = env.data_dir.join("config.yaml");
    assert!(config_path.exists());

    // the template must not break later commands
    env.command().args(["room", "list"]).assert().success();

    fs::write(&config_path, "log_mode: quiet\n").unwrap();
    env.command()
        .args(["init", "--overwrite", "--with-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "log_mode: quiet\n");
}

#[test]
fn test_init_dry_run_changes_nothing() {
    let env = TestEnv::new();

    env.command()
        .args(["init", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry-run mode"));

    assert!(!env.data_dir.exists());
}

#[test]
fn test_init_respects_configured_file_name() {
    let env = TestEnv::new();
    fs::create_dir_all(&env.data_dir).unwrap();
    fs::write(
        env.data_dir.join("config.yaml"),
        "database:\n  file_name: front-desk.db\n",
    )
    .unwrap();

    env.command().arg("init").assert().success();
    assert!(env.data_dir.join("front-desk.db").exists());
    assert!(!env.database_path().exists());
}

#[test]
fn test_disable_autoinit_reports_missing_database() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "room", "list"])
        .assert()
        .code(3);
    assert!(!env.database_path().exists());

    env.command()
        .env("HOTEL_DISABLE_AUTOINIT", "true")
        .args(["room", "list"])
        .assert()
        .code(3);

    env.command().arg("init").assert().success();
    env.command()
        .args(["--disable-autoinit", "room", "list"])
        .assert()
        .success();
}

#[test]
fn test_show_data_dir() {
    let env = TestEnv::new();

    env.command()
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(predicate::str::contains("hotel-data"));

    env.command_bare()
        .env("HOTEL_DATA_DIR", env.path().join("from-env"))
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env"));
}

#[test]
fn test_invalid_config_is_configuration_error() {
    let env = TestEnv::new();
    fs::create_dir_all(&env.data_dir).unwrap();
    fs::write(env.data_dir.join("config.yaml"), "colour: blue\n").unwrap();

    env.command().args(["room", "list"]).assert().code(7);
}

#[test]
fn test_project_config_in_working_directory() {
    let env = TestEnv::new();
    fs::write(env.path().join("hotel.yaml"), "output_format: json\n").unwrap();
    env.add_room(101, "Standard", "100");

    env.command()
        .args(["room", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_completions() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hotel"));
}
