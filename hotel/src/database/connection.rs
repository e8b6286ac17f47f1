//! Opening and closing the hotel database.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;

use super::config::DatabaseConfig;

/// An open hotel database.
///
/// The connection is closed when the value is dropped; [`Database::close`]
/// closes it explicitly and reports any error.
///
/// # Examples
///
/// ```no_run
/// use hotel::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/hotel.db");
/// let db = Database::open(config).unwrap();
/// db.close().unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

fn open_flags(config: &DatabaseConfig) -> OpenFlags {
    let access = if config.read_only {
        OpenFlags::SQLITE_OPEN_READ_ONLY
    } else if config.auto_create {
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE
    } else {
        OpenFlags::SQLITE_OPEN_READ_WRITE
    };
    access | OpenFlags::SQLITE_OPEN_NO_MUTEX
}

/// Busy timeout always; WAL and relaxed syncing only for writers.
fn configure(conn: &Connection, config: &DatabaseConfig) -> Result<()> {
    conn.busy_timeout(config.busy_timeout)?;
    if !config.read_only {
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        log::debug!("journal mode {mode}");
        conn.pragma_update(None, "synchronous", "NORMAL")?;
    }
    Ok(())
}

impl Database {
    /// Opens the database file, creating it and its directory when
    /// `auto_create` is set, then creates or checks the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory cannot be created
    /// - The file cannot be opened or is not a database
    /// - The stored schema version is not the current one
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        log::debug!("opening database at {}", config.path.display());
        let conn = Connection::open_with_flags(&config.path, open_flags(&config))?;
        configure(&conn, &config)?;
        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self { conn, config })
    }

    /// Returns the path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns the configuration the database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Closes the connection.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` fails to close the connection cleanly.
    pub fn close(self) -> Result<()> {
        log::debug!("closing database at {}", self.config.path.display());
        self.conn.close().map_err(|(_, e)| e.into())
    }
}
