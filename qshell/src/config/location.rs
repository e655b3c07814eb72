//! Configuration file and state directory locations.
//!
//! The configuration file defaults to `~/.qshell.json`. An explicit path is
//! normalized to carry a `.json` suffix; the normalization is pure path
//! arithmetic and never touches the filesystem. Local state lives under a
//! root directory, `~/.qshell` by default or `./.qshell` in local mode.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File name of the per-user configuration file.
pub const CONFIG_FILE_NAME: &str = ".qshell.json";

/// Directory name of the local state root.
pub const ROOT_DIR_NAME: &str = ".qshell";

/// Suffix every configuration file path carries.
pub const JSON_SUFFIX: &str = ".json";

/// Returns the current user's home directory.
///
/// # Errors
///
/// Returns [`Error::HomeDirectoryNotFound`] if it cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    home::home_dir().ok_or(Error::HomeDirectoryNotFound)
}

/// Appends `.json` to a path that does not already end with it.
///
/// Idempotent: applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use qshell::config::location::ensure_json_suffix;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(ensure_json_suffix(Path::new("/etc/qshell")), PathBuf::from("/etc/qshell.json"));
/// assert_eq!(ensure_json_suffix(Path::new("/etc/q.json")), PathBuf::from("/etc/q.json"));
/// ```
#[must_use]
pub fn ensure_json_suffix(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(JSON_SUFFIX) {
        return path.to_path_buf();
    }
    let mut with_suffix = OsString::from(path.as_os_str());
    with_suffix.push(JSON_SUFFIX);
    PathBuf::from(with_suffix)
}

/// Expands a leading `~` against `home`.
///
/// `~user` syntax is not supported and is left untouched.
#[must_use]
pub fn expand_tilde(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Default configuration file inside `home`.
#[must_use]
pub fn default_config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE_NAME)
}

/// Resolves the configuration file path.
///
/// An explicit path has `~` expanded and is given a `.json` suffix;
/// otherwise the per-user default is used.
#[must_use]
pub fn resolve_config_file(explicit: Option<&Path>, home: &Path) -> PathBuf {
    match explicit {
        Some(path) => ensure_json_suffix(&expand_tilde(path, home)),
        None => default_config_path(home),
    }
}

/// Resolves the local state root directory.
///
/// In local mode the root lives in `working_dir`, otherwise in `home`.
#[must_use]
pub fn resolve_root_path(local: bool, home: &Path, working_dir: &Path) -> PathBuf {
    if local {
        working_dir.join(ROOT_DIR_NAME)
    } else {
        home.join(ROOT_DIR_NAME)
    }
}
