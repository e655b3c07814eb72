//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show_config`: Show every setting with its resolved value
//! - `get_setting`: Print the resolved value of one setting
//! - `set_setting`: Persist a setting into the configuration file
//! - `show_config_path`: Show the resolved configuration file path
//! - `old_account_path`: Show where the account file is rotated to
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod get_setting;
pub mod old_account_path;
pub mod set_setting;
pub mod show_config;
pub mod show_config_path;

pub use completions::CompletionsCommand;
pub use get_setting::GetSettingCommand;
pub use old_account_path::OldAccountPathCommand;
pub use set_setting::SetSettingCommand;
pub use show_config::ShowConfigCommand;
pub use show_config_path::ShowConfigPathCommand;
