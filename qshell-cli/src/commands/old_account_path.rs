//! Command to show where the account file is rotated to.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Show where the account file is rotated to.
#[derive(Args)]
pub struct OldAccountPathCommand {}

impl OldAccountPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        println!("{}", config.old_account_path());
        Ok(())
    }
}
