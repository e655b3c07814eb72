//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use qshell::{Error as LibError, ExitStatus};
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Processing error (library or I/O failure)
    /// - 2: Local error that halted the run (bad arguments or configuration)
    pub fn exit_code(&self) -> i32 {
        let status = match self {
            CliError::Library(LibError::HomeDirectoryNotFound) => ExitStatus::Halt,
            CliError::Library(_) | CliError::Io(_) => ExitStatus::Error,
            CliError::InvalidArguments(_) | CliError::Config(_) => ExitStatus::Halt,
        };
        status.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
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
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Config("x".into()).exit_code(), 2);
        assert_eq!(
            CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(),
            1
        );
        assert_eq!(CliError::Library(LibError::HomeDirectoryNotFound).exit_code(), 2);
        assert_eq!(
            CliError::Library(LibError::UnknownSetting { name: "x".into() }).exit_code(),
            1
        );
    }

    #[test]
    fn test_display() {
        let err = CliError::Config("bad file".into());
        assert_eq!(err.to_string(), "Configuration error: bad file");
    }
}
