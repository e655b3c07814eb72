//! Command to show the resolved configuration file path.

use crate::error::CliError;
use crate::utils::{resolve_config_file, GlobalOptions};
use clap::Args;

/// Show the resolved configuration file path.
#[derive(Args)]
pub struct ShowConfigPathCommand {}

impl ShowConfigPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = resolve_config_file(global)?;

        println!("{}", path.display());
        Ok(())
    }
}
