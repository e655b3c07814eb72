//! Main entry point for the qshell CLI.
//!
//! Parses global flags, bootstraps logging and dispatches to one of the
//! configuration commands:
//! - `show-config`: Show every setting with its resolved value
//! - `get-setting`: Print one setting
//! - `set-setting`: Persist a setting into the configuration file
//! - `show-config-path`: Show the configuration file path
//! - `old-account-path`: Show the account rotation path
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::{CommandFactory, Parser};
use cli::Cli;
use qshell::ExitStatus;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on the debug flag
    let logger = qshell::init_logger(cli.debug);
    if let Err(e) = logger.install() {
        eprintln!("WARN: logger already installed: {e}");
    }

    if cli.version {
        println!("qshell {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(ExitStatus::Ok.code());
    }

    let Some(command) = cli.command else {
        let mut cmd = Cli::command();
        let code = match cmd.print_help() {
            Ok(()) => ExitStatus::Ok,
            Err(_) => ExitStatus::Error,
        };
        println!();
        std::process::exit(code.code());
    };

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        debug: cli.debug,
        config_file: cli.config,
        local: cli.local,
    };

    // Execute the command
    let result = match command {
        cli::Command::ShowConfig(cmd) => cmd.execute(&global),
        cli::Command::GetSetting(cmd) => cmd.execute(&global),
        cli::Command::SetSetting(cmd) => cmd.execute(&global),
        cli::Command::ShowConfigPath(cmd) => cmd.execute(&global),
        cli::Command::OldAccountPath(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(ExitStatus::Ok.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
