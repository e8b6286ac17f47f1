//! Error types for the hotel library.
//!
//! This module provides the error hierarchy shared by the entity model, the
//! management layer and the persistence adapter, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a hotel error.
///
/// # Examples
///
/// ```
/// use hotel::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotel library.
///
/// Business-rule failures (`NotFound`, `RoomUnavailable`, `RoomOccupied`,
/// `DuplicateKey`, `ReservationCancelled`) are recoverable and leave every registry
/// untouched. Store and I/O failures are not.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested entity was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The room is already booked.
    #[error("room {number} is not available")]
    RoomUnavailable {
        /// The room number.
        number: u32,
    },

    /// The room still has an active reservation and cannot be removed.
    #[error("room {number} has an active reservation")]
    RoomOccupied {
        /// The room number.
        number: u32,
    },

    /// An entity with the same natural key is already registered.
    #[error("duplicate {entity}: {key} is already registered")]
    DuplicateKey {
        /// The kind of entity ("room" or "client").
        entity: &'static str,
        /// The conflicting key.
        key: String,
    },

    /// Only cancelled reservations exist for the given key.
    #[error("reservation {key} is cancelled")]
    ReservationCancelled {
        /// The reservation key.
        key: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },

    /// A stored row could not be decoded.
    #[error("corrupt {table} row: {details}")]
    CorruptRow {
        /// The table the row came from.
        table: &'static str,
        /// Details about the decoding failure.
        details: String,
    },
}

impl Error {
    /// Builds a `NotFound` error for a room number.
    #[must_use]
    pub fn room_not_found(number: u32) -> Self {
        Self::NotFound {
            resource: format!("room {number}"),
        }
    }

    /// Builds a `NotFound` error for a client national id.
    #[must_use]
    pub fn client_not_found(national_id: &str) -> Self {
        Self::NotFound {
            resource: format!("client {national_id}"),
        }
    }

    /// Check if error indicates a missing entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// let err = Error::room_not_found(101);
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a business-rule failure that leaves state unchanged.
    ///
    /// Interactive callers report these and carry on; anything else ends the
    /// session.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// assert!(Error::RoomUnavailable { number: 101 }.is_recoverable());
    /// let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
    /// assert!(!io.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::RoomUnavailable { .. }
                | Self::RoomOccupied { .. }
                | Self::DuplicateKey { .. }
                | Self::ReservationCancelled { .. }
                | Self::Validation { .. }
        )
    }
}
