//! Build script for qshell-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("qshell")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Qiniu command-line tool for managing your bucket and CDN")
        .disable_version_flag(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Debug mode")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Show version")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('C')
                .long("config")
                .help("Config file (default is $HOME/.qshell.json)")
                .value_name("PATH")
                .global(true)
                .env("QSHELL_CONFIG"),
        )
        .arg(
            Arg::new("local")
                .short('L')
                .long("local")
                .help("Use current directory as the local state root")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("show-config")
                .about("Show every setting with its resolved value")
                .long_about("Display each setting, its value and optionally where it came from"),
            Command::new("get-setting")
                .about("Print the resolved value of one setting")
                .long_about("Resolve a setting by name or key, printing an empty line if unset"),
            Command::new("set-setting")
                .about("Persist a setting into the configuration file")
                .long_about("Write a setting under its canonical and legacy keys"),
            Command::new("show-config-path")
                .about("Show the resolved configuration file path")
                .long_about("Display the path of the configuration file in use"),
            Command::new("old-account-path")
                .about("Show where the account file is rotated to")
                .long_about("Display the account file path prefixed with old_"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main qshell.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("qshell.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
