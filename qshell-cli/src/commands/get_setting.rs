//! Command to print the resolved value of one setting.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use qshell::Setting;

/// Print the resolved value of one setting.
///
/// An unset setting prints an empty line.
#[derive(Args)]
pub struct GetSettingCommand {
    /// Setting name (e.g. `up-host`) or key (e.g. `hosts.up`, `hosts.up_host`)
    #[arg(value_name = "SETTING")]
    pub setting: Setting,
}

impl GetSettingCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        if let Some(resolved) = config.resolve(self.setting) {
            log::debug!(
                "{} resolved from {} layer key {}",
                self.setting,
                resolved.layer.as_str(),
                resolved.key
            );
        }
        println!("{}", config.get(self.setting));
        Ok(())
    }
}
