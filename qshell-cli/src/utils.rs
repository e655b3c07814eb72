//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, path resolution and output formatting.

use crate::error::CliError;
use qshell::config::location;
use qshell::{Config, ConfigBuilder};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Debug mode.
    pub debug: bool,

    /// Explicit configuration file.
    pub config_file: Option<PathBuf>,

    /// Keep local state under the current directory.
    pub local: bool,
}

/// Load the layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. The root path chosen by `--local`
/// 2. The configuration file (`--config` or `~/.qshell.json`)
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().local(global.local);
    if let Some(ref path) = global.config_file {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the configuration file path without reading it.
pub fn resolve_config_file(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let home = location::home_dir()?;
    Ok(location::resolve_config_file(
        global.config_file.as_deref(),
        &home,
    ))
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Mask a secret for display, keeping only its last four characters.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_path_outside_home() {
        let path = PathBuf::from("/usr/local/bin");
        assert_eq!(shorten_path(&path), "/usr/local/bin");
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
    }
}
