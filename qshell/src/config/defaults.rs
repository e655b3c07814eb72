//! Built-in defaults seeded before the configuration file is read.

use crate::config::resolver::Config;
use crate::config::setting::Setting;
use std::path::{Path, PathBuf};

/// Default resource service host.
pub const DEFAULT_RS_HOST: &str = "rs.qiniu.com";

/// Default resource listing host.
pub const DEFAULT_RSF_HOST: &str = "rsf.qiniu.com";

/// Default download host.
pub const DEFAULT_IO_HOST: &str = "iovip.qbox.me";

/// Default API host.
pub const DEFAULT_API_HOST: &str = "api.qiniu.com";

/// Account database file name under the root path.
pub const ACCOUNT_DB_FILE: &str = "account.db";

/// Account file name under the root path.
pub const ACCOUNT_FILE: &str = "account.json";

/// Account database location for a root path.
#[must_use]
pub fn account_db_path(root: &Path) -> PathBuf {
    root.join(ACCOUNT_DB_FILE)
}

/// Account file location for a root path.
#[must_use]
pub fn account_path(root: &Path) -> PathBuf {
    root.join(ACCOUNT_FILE)
}

/// Seeds the default layer: account files under `root` and the service
/// hosts. The upload host has no default.
pub fn apply_defaults(config: &mut Config, root: &Path) {
    config.set_default(
        Setting::AccountDbPath,
        &account_db_path(root).to_string_lossy(),
    );
    config.set_default(Setting::AccountPath, &account_path(root).to_string_lossy());
    config.set_default(Setting::RsHost, DEFAULT_RS_HOST);
    config.set_default(Setting::RsfHost, DEFAULT_RSF_HOST);
    config.set_default(Setting::IoHost, DEFAULT_IO_HOST);
    config.set_default(Setting::ApiHost, DEFAULT_API_HOST);
}
