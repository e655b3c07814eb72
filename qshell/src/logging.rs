//! Logging infrastructure for the qshell library.
//!
//! This module provides a simple stderr-based logging system with
//! configurable log levels. The [`Logger`] can be used directly, or
//! installed as the backend of the `log` facade so that library code
//! reporting through `log::debug!` and friends ends up on stderr.

use std::env;
use std::fmt;

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Debug).
///
/// # Examples
///
/// ```
/// use qshell::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors, warnings and informational messages).
    Normal,
    /// Debug output (everything, including debug messages).
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "debug" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use qshell::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The most verbose `log` facade level this level lets through.
    #[must_use]
    pub const fn to_filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based logger.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level.
///
/// # Examples
///
/// ```
/// use qshell::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.debug("This will not be printed (requires Debug)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are always displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are displayed at Normal and Debug levels.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Debug level.
    ///
    /// # Examples
    ///
    /// ```
    /// use qshell::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Debug);
    /// logger.debug("loaded /home/u/.qshell.json");
    /// ```
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Debug {
            eprintln!("DEBUG: {message}");
        }
    }

    /// Installs this logger as the global `log` facade backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger was already installed.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.level.to_filter());
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.to_filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        match record.level() {
            log::Level::Error => self.error(&message),
            log::Level::Warn => self.warn(&message),
            log::Level::Info => self.info(&message),
            log::Level::Debug | log::Level::Trace => self.debug(&message),
        }
    }

    fn flush(&self) {}
}

/// Initializes a logger based on the debug flag and environment.
///
/// The priority order is:
/// 1. The `--debug` CLI flag
/// 2. `QSHELL_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Examples
///
/// ```
/// use qshell::{init_logger, LogLevel};
///
/// let logger = init_logger(true);
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
#[must_use]
pub fn init_logger(debug: bool) -> Logger {
    if debug {
        return Logger::new(LogLevel::Debug);
    }

    if let Ok(env_value) = env::var("QSHELL_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use serial_test::serial;

    /// Runs `f` with `QSHELL_LOG_MODE` set to `value`, restoring it afterwards.
    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved_env = env::var("QSHELL_LOG_MODE").ok();
        match value {
            Some(val) => env::set_var("QSHELL_LOG_MODE", val),
            None => env::remove_var("QSHELL_LOG_MODE"),
        }

        f();

        match saved_env {
            Some(val) => env::set_var("QSHELL_LOG_MODE", val),
            None => env::remove_var("QSHELL_LOG_MODE"),
        }
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Debug);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Debug), "debug");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("normal").unwrap(), LogLevel::Normal);
        assert_eq!(LogLevel::parse("Quiet").unwrap(), LogLevel::Quiet);
        assert!(LogLevel::parse("verbose").is_err());
        assert!(LogLevel::parse("").is_err());
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(LogLevel::Quiet.to_filter(), log::LevelFilter::Off);
        assert_eq!(LogLevel::Normal.to_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Debug.to_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_logger_default() {
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_facade_enabled_respects_level() {
        let debug = log::MetadataBuilder::new().level(log::Level::Debug).build();
        let info = log::MetadataBuilder::new().level(log::Level::Info).build();

        assert!(Logger::new(LogLevel::Debug).enabled(&debug));
        assert!(!Logger::new(LogLevel::Normal).enabled(&debug));
        assert!(Logger::new(LogLevel::Normal).enabled(&info));
        assert!(!Logger::new(LogLevel::Quiet).enabled(&info));
    }

    #[test]
    #[serial]
    fn test_init_logger_defaults() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false).level(), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_debug_flag_overrides_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(true).level(), LogLevel::Debug);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_from_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(init_logger(false).level(), LogLevel::Quiet);
        });
        with_log_mode(Some("debug"), || {
            assert_eq!(init_logger(false).level(), LogLevel::Debug);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_env_invalid_fallback() {
        with_log_mode(Some("loud"), || {
            assert_eq!(init_logger(false).level(), LogLevel::Normal);
        });
    }
}
