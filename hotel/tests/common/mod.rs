//! Common test utilities for integration tests.

use chrono::NaiveDate;
use tempfile::TempDir;

use hotel::reservation::parse_date;
use hotel::{Database, DatabaseConfig, Reservation, ReservationKey};

/// A database in a temporary directory that lives as long as the value.
pub struct TestDatabase {
    pub dir: TempDir,
    pub db: Database,
}

impl TestDatabase {
    /// Opens a fresh database named `hotel.db` in a new temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("hotel.db"))).unwrap();
        Self { dir, db }
    }

    /// Closes the connection and opens a new one on the same file.
    pub fn reopen(self) -> Self {
        let Self { dir, db } = self;
        db.close().unwrap();
        let db = Database::open(DatabaseConfig::new(dir.path().join("hotel.db"))).unwrap();
        Self { dir, db }
    }
}

/// Parses a `YYYY-MM-DD` literal.
pub fn date(value: &str) -> NaiveDate {
    parse_date(value).unwrap()
}

/// An active reservation for `national_id` in `room` between two dates.
#[allow(dead_code)]
pub fn reservation(national_id: &str, room: u32, check_in: &str, check_out: &str) -> Reservation {
    Reservation::new(
        ReservationKey::new(national_id, room),
        date(check_in),
        date(check_out),
    )
}
