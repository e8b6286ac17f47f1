//! Database schema definitions and SQL constants.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Key-value table holding the schema version.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// Rooms with a unique room number. `id` records insertion order, which
/// reloads preserve. `is_available` holds 0 or 1.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        number INTEGER NOT NULL UNIQUE,
        category TEXT NOT NULL,
        nightly_rate REAL NOT NULL,
        is_available INTEGER NOT NULL
    )";

/// Clients keyed by national id.
pub const CREATE_CLIENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS clients (
        national_id TEXT PRIMARY KEY NOT NULL,
        first_names TEXT NOT NULL,
        last_names TEXT NOT NULL
    )";

/// Reservations with a surrogate row id. Dates are `YYYY-MM-DD` strings.
///
/// Client and room are plain values with no foreign keys: a removed room's
/// reservation history stays in the table.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_national_id TEXT NOT NULL,
        room_number INTEGER NOT NULL,
        check_in TEXT NOT NULL,
        check_out TEXT NOT NULL,
        status TEXT NOT NULL
    )";

/// Index backing lookups by (client, room).
pub const CREATE_RESERVATION_KEY_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_key
    ON reservations(client_national_id, room_number)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

pub(super) const INSERT_ROOM: &str = r"
    INSERT INTO rooms (number, category, nightly_rate, is_available)
    VALUES (?1, ?2, ?3, ?4)
";

pub(super) const UPDATE_ROOM: &str = r"
    UPDATE rooms
    SET category = ?1, nightly_rate = ?2, is_available = ?3
    WHERE number = ?4
";

pub(super) const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (client_national_id, room_number, check_in, check_out, status)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

/// Updates the oldest still-active row for a (client, room) pair.
pub(super) const UPDATE_ACTIVE_RESERVATION: &str = r"
    UPDATE reservations
    SET check_in = ?1, check_out = ?2, status = ?3
    WHERE id = (
        SELECT id FROM reservations
        WHERE client_national_id = ?4 AND room_number = ?5 AND status = 'Active'
        ORDER BY id
        LIMIT 1
    )
";
