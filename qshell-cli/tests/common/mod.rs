//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated home and working directories.
///
/// Every command runs with `HOME` pointing at a temporary directory, so
/// the default `~/.qshell.json` and `~/.qshell` never touch the real user.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Fake home directory
    pub home: PathBuf,
    /// Working directory for commands
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty home and work directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home = temp_dir.path().join("home");
        let work = temp_dir.path().join("work");
        std::fs::create_dir_all(&home).expect("Failed to create home dir");
        std::fs::create_dir_all(&work).expect("Failed to create work dir");

        Self {
            temp_dir,
            home,
            work,
        }
    }

    /// Get a command builder running in the isolated environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("qshell").expect("Failed to find qshell binary");
        cmd.env("HOME", &self.home)
            .env_remove("QSHELL_CONFIG")
            .env_remove("QSHELL_LOG_MODE")
            .current_dir(&self.work);
        cmd
    }

    /// Path of the default configuration file.
    pub fn default_config(&self) -> PathBuf {
        self.home.join(".qshell.json")
    }

    /// Write the default configuration file.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.default_config(), contents).expect("Failed to write config");
    }

    /// Write a configuration file at an arbitrary path.
    pub fn write_file(&self, path: &Path, contents: &str) {
        std::fs::write(path, contents).expect("Failed to write file");
    }

    /// Run `qshell get-setting <name>` and return the trimmed stdout.
    pub fn get_setting(&self, name: &str) -> String {
        let output = self
            .command()
            .arg("get-setting")
            .arg(name)
            .output()
            .expect("Failed to run get-setting");

        assert!(
            output.status.success(),
            "get-setting failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }

    /// Read the default configuration file as JSON.
    pub fn read_config_json(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.default_config()).expect("Failed to read config");
        serde_json::from_str(&raw).expect("Config is not valid JSON")
    }
}
