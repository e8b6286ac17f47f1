//! Database layer for persistent storage of rooms, clients, and reservations.
//!
//! This module provides a SQLite-based storage layer: connection management,
//! schema versioning, and CRUD operations. The in-memory
//! [`HotelManager`](crate::HotelManager) stays authoritative; callers mirror
//! each successful operation with the matching write here.
//!
//! # Examples
//!
//! ```no_run
//! use hotel::database::{Database, DatabaseConfig};
//! use hotel::Room;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/hotel.db")).unwrap();
//!
//! let mut manager = db.load_manager().unwrap();
//! let room = Room::standard(101, 100.0);
//! manager.add_room(room.clone()).unwrap();
//! db.insert_room(&room).unwrap();
//!
//! for room in hotel::Database::list_rooms(db.connection()).unwrap() {
//!     println!("{room}");
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATA_DIR_ENV,
    DEFAULT_DATABASE_FILE,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
