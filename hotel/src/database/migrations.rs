//! Schema creation and version checks.
//!
//! The schema version lives in the `metadata` table. A file without that
//! table is treated as version 0 and gets the current schema.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_CLIENTS_TABLE, CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE,
    CREATE_RESERVATION_KEY_INDEX, CREATE_ROOMS_TABLE, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

const METADATA_TABLE_EXISTS: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'metadata'";

/// Statements creating the current schema, in dependency order.
const SCHEMA: [&str; 5] = [
    CREATE_METADATA_TABLE,
    CREATE_ROOMS_TABLE,
    CREATE_CLIENTS_TABLE,
    CREATE_RESERVATIONS_TABLE,
    CREATE_RESERVATION_KEY_INDEX,
];

/// Creates all tables and indices and records the schema version.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use hotel::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA {
        conn.execute(statement, [])?;
    }
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    Ok(())
}

/// Reads the stored schema version; 0 means the file has no schema yet.
///
/// # Errors
///
/// Returns `CorruptRow` if the stored version is not a number, or a
/// database error if the query fails.
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let tables: i64 = conn.query_row(METADATA_TABLE_EXISTS, [], |row| row.get(0))?;
    if tables == 0 {
        return Ok(0);
    }

    let stored: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    stored.map_or(Ok(0), |value| {
        value.trim().parse().map_err(|_| Error::CorruptRow {
            table: "metadata",
            details: format!("schema_version '{value}' is not a number"),
        })
    })
}

/// Creates the schema on a fresh file and rejects any other version.
///
/// # Errors
///
/// Returns `UnsupportedSchemaVersion` if the stored version differs from the
/// current one, or a database error if queries fail.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    match get_schema_version(conn)? {
        0 => {
            log::debug!("creating schema version {CURRENT_SCHEMA_VERSION}");
            initialize_schema(conn)
        }
        CURRENT_SCHEMA_VERSION => Ok(()),
        found => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}
