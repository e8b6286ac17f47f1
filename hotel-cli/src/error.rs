//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to an exit code.

use std::fmt;
use hotel::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Database not found and auto-init disabled.
    NoDataDirectory,

    /// Configuration error.
    Config(String),

    /// Business-rule failure (unknown room, room taken, ...) - exit code 1.
    Rejected(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Business-rule failure (not found, unavailable, duplicate, cancelled)
    /// - 3: No data directory found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Database or other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Rejected(_) => 1,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) | CliError::Rejected(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Database not found (run `hotel init` or drop --disable-autoinit)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) | CliError::Rejected(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Validation { field, message } => {
                CliError::InvalidArguments(format!("{field}: {message}"))
            }
            LibError::Io(io) => CliError::Io(io),
            LibError::DataDirectoryNotFound { .. } => CliError::NoDataDirectory,
            e if e.is_recoverable() => CliError::Rejected(e),
            e => CliError::Library(e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_errors_exit_one() {
        let err = CliError::from(LibError::room_not_found(101));
        assert_eq!(err.exit_code(), 1);
        let err = CliError::from(LibError::RoomUnavailable { number: 101 });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), LibError::RoomUnavailable { number: 101 }.to_string());
    }

    #[test]
    fn test_validation_is_invalid_arguments() {
        let err = CliError::from(LibError::Validation {
            field: "date".into(),
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_other_exit_codes() {
        assert_eq!(CliError::NoDataDirectory.exit_code(), 3);
        assert_eq!(CliError::from(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(), 5);
        assert_eq!(
            CliError::from(LibError::UnsupportedSchemaVersion {
                expected: 1,
                found: 2
            })
            .exit_code(),
            6
        );
        assert_eq!(CliError::Config("bad".into()).exit_code(), 7);
    }
}
