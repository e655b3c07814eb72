//! Startup bootstrap: builds the [`Config`] for one process.

use crate::config::defaults::apply_defaults;
use crate::config::loader::ConfigLoader;
use crate::config::location::{home_dir, resolve_config_file, resolve_root_path};
use crate::config::resolver::Config;
use crate::config::setting::Setting;
use crate::config::store::ConfigStore;
use crate::error::Result;
use std::env;
use std::path::PathBuf;

/// Builder assembling a [`Config`] from its sources.
///
/// `build` runs these steps in order:
///
/// 1. Load the configuration file (if present) into the file layer
/// 2. Set the root path explicitly (`~/.qshell`, or `./.qshell` in local mode)
/// 3. Seed defaults for the account files under the root and the hosts
/// 4. Apply overrides
///
/// The root path is always set explicitly, so a `path.root` entry in the
/// configuration file does not move it; use an override instead.
///
/// # Examples
///
/// ```
/// use qshell::{ConfigBuilder, Setting};
///
/// let config = ConfigBuilder::new()
///     .with_home_dir("/home/u")
///     .skip_file()
///     .with_override(Setting::UpHost, "up.example.com")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.root_path(), "/home/u/.qshell");
/// assert_eq!(config.account_path(), "/home/u/.qshell/account.json");
/// assert_eq!(config.up_host(), "up.example.com");
/// assert_eq!(config.rs_host(), "rs.qiniu.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    local: bool,
    home_dir: Option<PathBuf>,
    working_dir: Option<PathBuf>,
    skip_file: bool,
    overrides: Vec<(Setting, String)>,
}

impl ConfigBuilder {
    /// Creates a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the configuration from `path` instead of `~/.qshell.json`.
    ///
    /// The path is given a `.json` suffix if it lacks one.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Keeps local state under the working directory instead of home.
    #[must_use]
    pub fn local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    /// Overrides the home directory.
    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Overrides the working directory used in local mode.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Does not read the configuration file.
    #[must_use]
    pub fn skip_file(mut self) -> Self {
        self.skip_file = true;
        self
    }

    /// Sets a value explicitly after everything else has been applied.
    #[must_use]
    pub fn with_override(mut self, setting: Setting, value: impl Into<String>) -> Self {
        self.overrides.push((setting, value.into()));
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the home or working directory cannot be
    /// determined, or if the configuration file exists but cannot be read
    /// or parsed.
    pub fn build(self) -> Result<Config> {
        let home = match self.home_dir.clone() {
            Some(home) => home,
            None => home_dir()?,
        };

        let config_path = resolve_config_file(self.config_file.as_deref(), &home);
        let mut store = ConfigStore::new();
        if self.skip_file {
            log::debug!("skipping configuration file {}", config_path.display());
        } else {
            store.replace_file_layer(ConfigLoader::load_file(&config_path)?);
        }

        let root = match self.root_override() {
            Some(root) => root,
            None => {
                let working_dir = match (&self.working_dir, self.local) {
                    (Some(dir), _) => dir.clone(),
                    (None, true) => env::current_dir()?,
                    (None, false) => home.clone(),
                };
                resolve_root_path(self.local, &home, &working_dir)
            }
        };
        log::debug!("using root path {}", root.display());

        let mut config = Config::from_store(store, Some(config_path));
        config.set(Setting::RootPath, &root.to_string_lossy());
        apply_defaults(&mut config, &root);

        for (setting, value) in &self.overrides {
            config.set(*setting, value);
        }

        Ok(config)
    }

    fn root_override(&self) -> Option<PathBuf> {
        self.overrides
            .iter()
            .rev()
            .find(|(setting, value)| *setting == Setting::RootPath && !value.is_empty())
            .map(|(_, value)| PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::store::Layer;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_under_home() {
        let home = TempDir::new().unwrap();
        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .build()
            .unwrap();

        let root = home.path().join(".qshell");
        assert_eq!(config.root_path(), root.to_string_lossy());
        assert_eq!(
            config.account_db_path(),
            root.join("account.db").to_string_lossy()
        );
        assert_eq!(config.config_file(), Some(home.path().join(".qshell.json").as_path()));
    }

    #[test]
    fn test_build_local_mode() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .with_working_dir(work.path())
            .local(true)
            .build()
            .unwrap();

        let root = work.path().join(".qshell");
        assert_eq!(config.root_path(), root.to_string_lossy());
        assert_eq!(
            config.account_path(),
            root.join("account.json").to_string_lossy()
        );
    }

    #[test]
    fn test_build_reads_file_layer() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".qshell.json"),
            r#"{"hosts": {"io_host": "io.legacy.com"}, "access_key": "ak"}"#,
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .build()
            .unwrap();

        assert_eq!(config.io_host(), "io.legacy.com");
        assert_eq!(config.access_key(), "ak");
        assert_eq!(
            config.resolve(Setting::IoHost).unwrap().layer,
            Layer::File
        );
    }

    #[test]
    fn test_file_cannot_move_root_path() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".qshell.json"),
            r#"{"path": {"root": "/elsewhere"}}"#,
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .build()
            .unwrap();

        assert_eq!(
            config.root_path(),
            home.path().join(".qshell").to_string_lossy()
        );
    }

    #[test]
    fn test_root_override_moves_derived_defaults() {
        let home = TempDir::new().unwrap();
        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .skip_file()
            .with_override(Setting::RootPath, "/srv/qshell")
            .build()
            .unwrap();

        assert_eq!(config.root_path(), "/srv/qshell");
        assert_eq!(config.account_db_path(), "/srv/qshell/account.db");
    }

    #[test]
    fn test_explicit_config_file_gets_json_suffix() {
        let home = TempDir::new().unwrap();
        let base = home.path().join("work");
        fs::write(home.path().join("work.json"), r#"{"secret_key": "sk"}"#).unwrap();

        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .with_config_file(&base)
            .build()
            .unwrap();

        assert_eq!(config.secret_key(), "sk");
        assert_eq!(config.config_file(), Some(home.path().join("work.json").as_path()));
    }

    #[test]
    fn test_skip_file_ignores_contents() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".qshell.json"), r#"{"access_key": "ak"}"#).unwrap();

        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .skip_file()
            .build()
            .unwrap();

        assert_eq!(config.access_key(), "");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let home = TempDir::new().unwrap();
        fs::write(home.path().join(".qshell.json"), "not json").unwrap();

        let result = ConfigBuilder::new().with_home_dir(home.path()).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_override_beats_file() {
        let home = TempDir::new().unwrap();
        fs::write(
            home.path().join(".qshell.json"),
            r#"{"hosts": {"up": "up.file.com"}}"#,
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_home_dir(home.path())
            .with_override(Setting::UpHost, "up.flag.com")
            .build()
            .unwrap();

        assert_eq!(config.up_host(), "up.flag.com");
    }
}
