//! Configuration system for qshell.
//!
//! This module provides layered configuration with support for:
//! - A JSON configuration file (`~/.qshell.json` or an explicit path)
//! - Legacy key aliases, so files written with an older key name still resolve
//! - Built-in defaults for hosts and local state paths
//! - Programmatic and command-line overrides via the builder
//!
//! # Configuration Precedence
//!
//! Each setting is resolved across layers (highest to lowest):
//!
//! 1. Explicit values (`Config::set`, builder overrides, the root path)
//! 2. The configuration file
//! 3. Built-in defaults
//!
//! Within a layer the canonical key is consulted before its legacy aliases,
//! and the first non-empty value wins. An unset setting reads as `""`.
//!
//! # Examples
//!
//! ```
//! use qshell::config::ConfigBuilder;
//! use qshell::Setting;
//!
//! let mut config = ConfigBuilder::new()
//!     .with_home_dir("/home/u")
//!     .skip_file()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.account_db_path(), "/home/u/.qshell/account.db");
//!
//! config.set(Setting::AccessKey, "ak");
//! assert_eq!(config.access_key(), "ak");
//! ```

pub mod builder;
pub mod defaults;
pub mod loader;
pub mod location;
pub mod resolver;
pub mod setting;
pub mod store;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use loader::{ConfigDocument, ConfigLoader};
pub use resolver::{Config, Resolved};
pub use setting::Setting;
pub use store::{ConfigStore, Layer};
