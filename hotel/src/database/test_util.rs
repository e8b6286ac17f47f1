//! Shared fixtures for database unit tests.

use std::ops::{Deref, DerefMut};

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::parse_date;

/// A database in its own temporary directory, removed on drop.
pub struct TestDatabase {
    db: Database,
    _dir: TempDir,
}

impl Deref for TestDatabase {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl DerefMut for TestDatabase {
    fn deref_mut(&mut self) -> &mut Database {
        &mut self.db
    }
}

pub fn create_test_database() -> TestDatabase {
    let dir = TempDir::new().unwrap();
    let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
    TestDatabase { db, _dir: dir }
}

pub fn date(value: &str) -> NaiveDate {
    parse_date(value).unwrap()
}
