//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, GetSettingCommand, OldAccountPathCommand, SetSettingCommand,
    ShowConfigCommand, ShowConfigPathCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing your bucket and CDN.
#[derive(Parser)]
#[command(name = "qshell")]
#[command(
    about = "Qiniu command-line tool for managing your bucket and CDN",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Debug mode
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Config file (default is $HOME/.qshell.json)
    #[arg(
        short = 'C',
        long = "config",
        value_name = "PATH",
        global = true,
        env = "QSHELL_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Use current directory as the local state root
    #[arg(short = 'L', long, global = true)]
    pub local: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every setting with its resolved value
    ShowConfig(ShowConfigCommand),

    /// Print the resolved value of one setting
    GetSetting(GetSettingCommand),

    /// Persist a setting into the configuration file
    SetSetting(SetSettingCommand),

    /// Show the resolved configuration file path
    ShowConfigPath(ShowConfigPathCommand),

    /// Show where the account file is rotated to
    OldAccountPath(OldAccountPathCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
