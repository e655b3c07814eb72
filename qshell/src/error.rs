//! Error types for the qshell library.
//!
//! Resolving a setting never fails (an unset setting reads as the empty
//! string). Errors only arise at the edges: locating the home directory,
//! reading or writing the configuration file, and parsing user input.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a qshell error.
///
/// # Examples
///
/// ```
/// use qshell::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("rs.qiniu.com".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the qshell library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON encoding or decoding error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The current user's home directory could not be determined.
    #[error("could not determine home directory")]
    HomeDirectoryNotFound,

    /// A setting name or key did not match any known setting.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The name that was looked up.
        name: String,
    },
}
