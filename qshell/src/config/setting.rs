//! Registry of configurable settings and their key aliases.
//!
//! Every externally tunable setting is addressed by one canonical key and
//! zero or more legacy keys. Legacy keys keep configuration files written
//! before a key was renamed working without a migration step.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A logical configuration item.
///
/// # Examples
///
/// ```
/// use qshell::Setting;
///
/// assert_eq!(Setting::UpHost.canonical_key(), "hosts.up");
/// assert_eq!(Setting::UpHost.keys(), &["hosts.up", "hosts.up_host"]);
/// assert_eq!("hosts.up_host".parse::<Setting>().unwrap(), Setting::UpHost);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Setting {
    /// Base directory for local state files.
    RootPath,
    /// Account database file.
    AccountDbPath,
    /// Account JSON file.
    AccountPath,
    /// Upload host.
    UpHost,
    /// Resource service host.
    RsHost,
    /// Resource listing host.
    RsfHost,
    /// Download (I/O) host.
    IoHost,
    /// API host.
    ApiHost,
    /// Access key credential.
    AccessKey,
    /// Secret key credential.
    SecretKey,
}

impl Setting {
    /// All settings, in display order.
    pub const ALL: [Setting; 10] = [
        Setting::RootPath,
        Setting::AccountDbPath,
        Setting::AccountPath,
        Setting::UpHost,
        Setting::RsHost,
        Setting::RsfHost,
        Setting::IoHost,
        Setting::ApiHost,
        Setting::AccessKey,
        Setting::SecretKey,
    ];

    /// Physical keys of this setting, canonical key first.
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::RootPath => &["path.root", "path.root_path"],
            Self::AccountDbPath => &["path.accdb", "path.acc_db_path"],
            Self::AccountPath => &["path.acc", "path.acc_path"],
            Self::UpHost => &["hosts.up", "hosts.up_host"],
            Self::RsHost => &["hosts.rs", "hosts.rs_host"],
            Self::RsfHost => &["hosts.rsf", "hosts.rsf_host"],
            Self::IoHost => &["hosts.io", "hosts.io_host"],
            Self::ApiHost => &["hosts.api", "hosts.api_host"],
            Self::AccessKey => &["access_key"],
            Self::SecretKey => &["secret_key"],
        }
    }

    /// The key new configuration is written under.
    #[must_use]
    pub const fn canonical_key(self) -> &'static str {
        self.keys()[0]
    }

    /// Legacy keys still honoured when reading.
    #[must_use]
    pub fn aliases(self) -> &'static [&'static str] {
        &self.keys()[1..]
    }

    /// Command-line name of this setting.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RootPath => "root-path",
            Self::AccountDbPath => "account-db-path",
            Self::AccountPath => "account-path",
            Self::UpHost => "up-host",
            Self::RsHost => "rs-host",
            Self::RsfHost => "rsf-host",
            Self::IoHost => "io-host",
            Self::ApiHost => "api-host",
            Self::AccessKey => "access-key",
            Self::SecretKey => "secret-key",
        }
    }

    /// Whether the value should be masked when displayed.
    #[must_use]
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::SecretKey)
    }

    /// Finds the setting owning a physical key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.keys().contains(&key))
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Setting {
    type Err = Error;

    /// Accepts a command-line name (`up-host`) or any physical key
    /// (`hosts.up`, `hosts.up_host`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|setting| setting.name().eq_ignore_ascii_case(trimmed))
            .or_else(|| Self::from_key(trimmed))
            .ok_or_else(|| Error::UnknownSetting {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_key_comes_first() {
        for setting in Setting::ALL {
            assert_eq!(setting.keys()[0], setting.canonical_key());
            assert!(!setting.aliases().contains(&setting.canonical_key()));
        }
    }

    #[test]
    fn test_keys_are_unique_across_settings() {
        let mut seen = HashSet::new();
        for setting in Setting::ALL {
            for key in setting.keys() {
                assert!(seen.insert(*key), "duplicate key {key}");
            }
        }
    }

    #[test]
    fn test_credentials_have_no_aliases() {
        assert!(Setting::AccessKey.aliases().is_empty());
        assert!(Setting::SecretKey.aliases().is_empty());
    }

    #[test]
    fn test_host_aliases() {
        assert_eq!(Setting::RsHost.aliases(), &["hosts.rs_host"]);
        assert_eq!(Setting::ApiHost.aliases(), &["hosts.api_host"]);
        assert_eq!(Setting::AccountDbPath.aliases(), &["path.acc_db_path"]);
    }

    #[test]
    fn test_parse_by_name_and_key() {
        assert_eq!("io-host".parse::<Setting>().unwrap(), Setting::IoHost);
        assert_eq!("IO-HOST".parse::<Setting>().unwrap(), Setting::IoHost);
        assert_eq!("hosts.io".parse::<Setting>().unwrap(), Setting::IoHost);
        assert_eq!("hosts.io_host".parse::<Setting>().unwrap(), Setting::IoHost);
        assert_eq!(
            "secret_key".parse::<Setting>().unwrap(),
            Setting::SecretKey
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hosts.cdn".parse::<Setting>().unwrap_err();
        assert!(matches!(err, Error::UnknownSetting { .. }));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for setting in Setting::ALL {
            assert_eq!(setting.to_string().parse::<Setting>().unwrap(), setting);
        }
    }

    #[test]
    fn test_only_secret_key_is_secret() {
        let secrets: Vec<_> = Setting::ALL.into_iter().filter(|s| s.is_secret()).collect();
        assert_eq!(secrets, vec![Setting::SecretKey]);
    }
}
