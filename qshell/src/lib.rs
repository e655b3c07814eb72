#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # qshell
//!
//! Configuration layer of a command-line tool for managing an object
//! storage bucket and its CDN.
//!
//! ## Core Types
//!
//! - [`Config`] and [`ConfigBuilder`]: layered configuration resolution
//! - [`Setting`]: configurable settings and their legacy key aliases
//! - [`FetchItem`]: remote fetch task descriptor
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use qshell::{Config, Setting};
//!
//! let mut config = Config::new();
//! config.set_default(Setting::ApiHost, "api.qiniu.com");
//! config.set(Setting::ApiHost, "api.example.com");
//!
//! assert_eq!(config.api_host(), "api.example.com");
//! assert_eq!(config.get_key("hosts.api_host"), "api.example.com");
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod status;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, Setting};
pub use error::{Error, Result};
pub use fetch::FetchItem;
pub use logging::{init_logger, LogLevel, Logger};
pub use status::{ExitStatus, BLOCK_BITS, BLOCK_SIZE};
