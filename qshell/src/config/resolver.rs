//! Typed configuration resolver.
//!
//! [`Config`] hides the alias mechanics of the [`ConfigStore`]: callers ask
//! for a [`Setting`] and get a single string back. An unset setting reads
//! as the empty string; there is no error path.

use crate::config::setting::Setting;
use crate::config::store::{ConfigStore, Layer};
use std::path::{Component, Path, PathBuf};

/// Prefix given to the rotated account file.
pub const OLD_ACCOUNT_PREFIX: &str = "old_";

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// The resolved value (never empty).
    pub value: &'a str,
    /// The layer holding the value.
    pub layer: Layer,
    /// The physical key holding the value.
    pub key: &'static str,
}

/// Resolved configuration for one process.
///
/// Constructed once during startup (usually through
/// [`ConfigBuilder`](crate::config::ConfigBuilder)) and passed by reference
/// to everything that needs it.
///
/// # Resolution order
///
/// Layers are consulted from highest to lowest precedence (explicit, file,
/// default). Within a layer the canonical key is read first, then each
/// legacy alias in order. The first non-empty value wins.
///
/// # Examples
///
/// ```
/// use qshell::{Config, Setting};
///
/// let mut config = Config::new();
/// assert_eq!(config.get(Setting::RsHost), "");
///
/// config.set_default(Setting::RsHost, "rs.qiniu.com");
/// assert_eq!(config.get(Setting::RsHost), "rs.qiniu.com");
///
/// config.set(Setting::RsHost, "rs.example.com");
/// assert_eq!(config.get(Setting::RsHost), "rs.example.com");
/// assert_eq!(config.get_key("hosts.rs_host"), "rs.example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    store: ConfigStore,
    config_file: Option<PathBuf>,
}

impl Config {
    /// Creates an empty configuration with no backing file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration over an existing store.
    #[must_use]
    pub fn from_store(store: ConfigStore, config_file: Option<PathBuf>) -> Self {
        Self { store, config_file }
    }

    /// The configuration file this configuration was loaded from, if any.
    #[must_use]
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Resolves a setting and reports which layer and key supplied it.
    ///
    /// Returns `None` when no key of the setting holds a non-empty value.
    #[must_use]
    pub fn resolve(&self, setting: Setting) -> Option<Resolved<'_>> {
        Layer::PRECEDENCE.into_iter().find_map(|layer| {
            setting.keys().iter().find_map(|key| {
                self.store
                    .get_in(layer, key)
                    .filter(|value| !value.is_empty())
                    .map(|value| Resolved {
                        value,
                        layer,
                        key: *key,
                    })
            })
        })
    }

    /// Resolves a setting to its value, or the empty string when unset.
    #[must_use]
    pub fn get(&self, setting: Setting) -> &str {
        self.resolve(setting).map_or("", |r| r.value)
    }

    /// Reads a single physical key, or the empty string when unset.
    #[must_use]
    pub fn get_key(&self, key: &str) -> &str {
        Layer::PRECEDENCE
            .into_iter()
            .filter_map(|layer| self.store.get_in(layer, key))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Sets a value under every key of the setting.
    ///
    /// Setting the empty string clears the explicit value so lower layers
    /// show through again.
    pub fn set(&mut self, setting: Setting, value: &str) {
        self.fan_out(Layer::Explicit, setting, value);
    }

    /// Sets a default under every key of the setting.
    pub fn set_default(&mut self, setting: Setting, value: &str) {
        self.fan_out(Layer::Default, setting, value);
    }

    fn fan_out(&mut self, layer: Layer, setting: Setting, value: &str) {
        for key in setting.keys() {
            self.store.insert(layer, key, value);
        }
    }

    /// Every setting with its resolved value, in registry order.
    pub fn settings(&self) -> impl Iterator<Item = (Setting, &str)> {
        Setting::ALL
            .into_iter()
            .map(move |setting| (setting, self.get(setting)))
    }

    /// Base directory for local state files.
    #[must_use]
    pub fn root_path(&self) -> &str {
        self.get(Setting::RootPath)
    }

    /// Account database file.
    #[must_use]
    pub fn account_db_path(&self) -> &str {
        self.get(Setting::AccountDbPath)
    }

    /// Account JSON file.
    #[must_use]
    pub fn account_path(&self) -> &str {
        self.get(Setting::AccountPath)
    }

    /// Path the account file is rotated to: same directory, file name
    /// prefixed with `old_`. Empty when the account path is unset.
    ///
    /// # Examples
    ///
    /// ```
    /// use qshell::{Config, Setting};
    ///
    /// let mut config = Config::new();
    /// assert_eq!(config.old_account_path(), "");
    ///
    /// config.set(Setting::AccountPath, "/home/u/.qshell/account.json");
    /// assert_eq!(config.old_account_path(), "/home/u/.qshell/old_account.json");
    /// ```
    #[must_use]
    pub fn old_account_path(&self) -> String {
        let account_path = self.account_path();
        if account_path.is_empty() {
            return String::new();
        }

        // A trailing separator names a directory, so the prefixed file goes
        // inside it: "/a/b/" rotates to "/a/b/old_b".
        let path = Path::new(account_path);
        let mut components = path.components();
        let rotated = match components.next_back() {
            None | Some(Component::RootDir | Component::Prefix(_)) => {
                path.join(OLD_ACCOUNT_PREFIX)
            }
            Some(last) => {
                let name = format!(
                    "{OLD_ACCOUNT_PREFIX}{}",
                    last.as_os_str().to_string_lossy()
                );
                if account_path.ends_with(std::path::is_separator) {
                    path.join(name)
                } else {
                    components.as_path().join(name)
                }
            }
        };
        rotated.to_string_lossy().into_owned()
    }

    /// Upload host.
    #[must_use]
    pub fn up_host(&self) -> &str {
        self.get(Setting::UpHost)
    }

    /// Resource service host.
    #[must_use]
    pub fn rs_host(&self) -> &str {
        self.get(Setting::RsHost)
    }

    /// Resource listing host.
    #[must_use]
    pub fn rsf_host(&self) -> &str {
        self.get(Setting::RsfHost)
    }

    /// Download host.
    #[must_use]
    pub fn io_host(&self) -> &str {
        self.get(Setting::IoHost)
    }

    /// API host.
    #[must_use]
    pub fn api_host(&self) -> &str {
        self.get(Setting::ApiHost)
    }

    /// Access key credential.
    #[must_use]
    pub fn access_key(&self) -> &str {
        self.get(Setting::AccessKey)
    }

    /// Secret key credential.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        self.get(Setting::SecretKey)
    }

    /// Sets the local state root.
    pub fn set_root_path(&mut self, value: &str) {
        self.set(Setting::RootPath, value);
    }

    /// Sets the default local state root.
    pub fn set_default_root_path(&mut self, value: &str) {
        self.set_default(Setting::RootPath, value);
    }

    /// Sets the account database file.
    pub fn set_account_db_path(&mut self, value: &str) {
        self.set(Setting::AccountDbPath, value);
    }

    /// Sets the default account database file.
    pub fn set_default_account_db_path(&mut self, value: &str) {
        self.set_default(Setting::AccountDbPath, value);
    }

    /// Sets the account JSON file.
    pub fn set_account_path(&mut self, value: &str) {
        self.set(Setting::AccountPath, value);
    }

    /// Sets the default account JSON file.
    pub fn set_default_account_path(&mut self, value: &str) {
        self.set_default(Setting::AccountPath, value);
    }

    /// Sets the upload host.
    pub fn set_up_host(&mut self, value: &str) {
        self.set(Setting::UpHost, value);
    }

    /// Sets the default upload host.
    pub fn set_default_up_host(&mut self, value: &str) {
        self.set_default(Setting::UpHost, value);
    }

    /// Sets the resource service host.
    pub fn set_rs_host(&mut self, value: &str) {
        self.set(Setting::RsHost, value);
    }

    /// Sets the default resource service host.
    pub fn set_default_rs_host(&mut self, value: &str) {
        self.set_default(Setting::RsHost, value);
    }

    /// Sets the resource listing host.
    pub fn set_rsf_host(&mut self, value: &str) {
        self.set(Setting::RsfHost, value);
    }

    /// Sets the default resource listing host.
    pub fn set_default_rsf_host(&mut self, value: &str) {
        self.set_default(Setting::RsfHost, value);
    }

    /// Sets the download host.
    pub fn set_io_host(&mut self, value: &str) {
        self.set(Setting::IoHost, value);
    }

    /// Sets the default download host.
    pub fn set_default_io_host(&mut self, value: &str) {
        self.set_default(Setting::IoHost, value);
    }

    /// Sets the API host.
    pub fn set_api_host(&mut self, value: &str) {
        self.set(Setting::ApiHost, value);
    }

    /// Sets the default API host.
    pub fn set_default_api_host(&mut self, value: &str) {
        self.set_default(Setting::ApiHost, value);
    }

    /// Sets the access key.
    pub fn set_access_key(&mut self, value: &str) {
        self.set(Setting::AccessKey, value);
    }

    /// Sets the default access key.
    pub fn set_default_access_key(&mut self, value: &str) {
        self.set_default(Setting::AccessKey, value);
    }

    /// Sets the secret key.
    pub fn set_secret_key(&mut self, value: &str) {
        self.set(Setting::SecretKey, value);
    }

    /// Sets the default secret key.
    pub fn set_default_secret_key(&mut self, value: &str) {
        self.set_default(Setting::SecretKey, value);
    }
}
