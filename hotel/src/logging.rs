//! Console logging for the hotel front desk.
//!
//! [`Logger`] prints status lines to stderr according to a [`LogLevel`]. The
//! same value can be installed as the process-wide backend of the `log`
//! facade, so diagnostics the library emits with `log::debug!` show up in
//! verbose sessions and nowhere else.

use std::env;
use std::fmt;
use std::str::FromStr;

use log::{Level, LevelFilter, Metadata, Record};

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "HOTEL_LOG_MODE";

/// How much the console says.
///
/// # Examples
///
/// ```
/// use hotel::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing but command output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including library diagnostics.
    Verbose,
}

impl LogLevel {
    /// Parses `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected value.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most detailed `log` record level shown at this verbosity.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        })
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Stderr logger for console status lines.
///
/// # Examples
///
/// ```
/// use hotel::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("room 101 has no reservations");
/// logger.info("not printed below Verbose");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message of this severity would be printed.
    #[must_use]
    pub fn shows(&self, severity: Level) -> bool {
        severity <= self.level.filter()
    }

    /// Printed unless quiet.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Printed unless quiet.
    pub fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Printed only when verbose.
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Printed only when verbose.
    pub fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    /// Makes this logger the backend of the `log` facade.
    ///
    /// Only the first call in a process takes effect; later calls return
    /// `false` and leave the installed logger alone.
    pub fn install(self) -> bool {
        let installed = log::set_boxed_logger(Box::new(self)).is_ok();
        if installed {
            log::set_max_level(self.level.filter());
        }
        installed
    }

    fn emit(&self, severity: Level, message: &str) {
        if self.shows(severity) {
            eprintln!("{severity}: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        self.shows(metadata.level())
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            self.emit(record.level(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Builds the console logger.
///
/// `--verbose` beats `--quiet`; without either flag, `HOTEL_LOG_MODE` decides,
/// and an unset or unreadable value means Normal.
///
/// # Examples
///
/// ```
/// use hotel::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var(LOG_MODE_ENV)
            .ok()
            .and_then(|mode| LogLevel::parse(&mode).ok())
            .unwrap_or(LogLevel::Normal)
    };
    Logger::new(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_ENV).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_ENV, v),
            None => env::remove_var(LOG_MODE_ENV),
        }
    }

    #[test]
    fn test_log_level_display_and_parse() {
        for level in [LogLevel::Quiet, LogLevel::Normal, LogLevel::Verbose] {
            assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
        }
        assert_eq!(LogLevel::parse(" Normal ").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_severity_filtering() {
        let quiet = Logger::new(LogLevel::Quiet);
        assert!(!quiet.shows(Level::Error));

        let normal = Logger::default();
        assert!(normal.shows(Level::Error));
        assert!(normal.shows(Level::Warn));
        assert!(!normal.shows(Level::Info));

        let verbose = Logger::new(LogLevel::Verbose);
        assert!(verbose.shows(Level::Debug));
        assert!(!verbose.shows(Level::Trace));
    }

    #[test]
    fn test_facade_enabled_matches_level() {
        use log::Log;

        let logger = Logger::new(LogLevel::Normal);
        let debug = Metadata::builder().level(Level::Debug).target("hotel").build();
        let warn = Metadata::builder().level(Level::Warn).target("hotel").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&warn));
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_flags() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
            // verbose takes precedence
            assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Quiet);
            assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
        });
        with_log_mode(Some("shouting"), || {
            assert_eq!(init_logger(false, false).level(), LogLevel::Normal);
        });
    }
}
