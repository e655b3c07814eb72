//! Command to persist a setting into the configuration file.

use crate::error::CliError;
use crate::utils::{resolve_config_file, shorten_path, GlobalOptions};
use clap::Args;
use qshell::config::ConfigLoader;
use qshell::Setting;

/// Persist a setting into the configuration file.
///
/// The value is written under the setting's canonical key and every legacy
/// key, so older readers of the file see it too.
#[derive(Args)]
pub struct SetSettingCommand {
    /// Setting name (e.g. `up-host`) or key (e.g. `hosts.up`)
    #[arg(value_name = "SETTING")]
    pub setting: Setting,

    /// New value
    #[arg(value_name = "VALUE")]
    pub value: String,
}

impl SetSettingCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.setting == Setting::RootPath {
            return Err(CliError::InvalidArguments(
                "root-path is chosen by --local and cannot be stored in the config file"
                    .to_string(),
            ));
        }

        let path = resolve_config_file(global)?;
        ConfigLoader::persist_setting(&path, self.setting, &self.value)?;

        log::info!("{} saved to {}", self.setting, shorten_path(&path));
        Ok(())
    }
}
