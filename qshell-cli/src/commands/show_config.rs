//! Command to show every setting with its resolved value.

use crate::error::CliError;
use crate::utils::{load_configuration, mask_secret, shorten_path, GlobalOptions};
use clap::Args;
use qshell::{Config, Setting};
use serde::Serialize;

/// Show every setting with its resolved value.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,

    /// Include which layer and key supplied each value
    #[arg(long)]
    pub sources: bool,
}

#[derive(Serialize)]
struct SettingReport {
    name: &'static str,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layer: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'static str>,
}

#[derive(Serialize)]
struct ConfigReport {
    config_file: Option<String>,
    settings: Vec<SettingReport>,
}

fn build_report(config: &Config) -> ConfigReport {
    let settings = Setting::ALL
        .into_iter()
        .map(|setting| {
            let resolved = config.resolve(setting);
            let raw = resolved.map_or("", |r| r.value);
            SettingReport {
                name: setting.name(),
                value: if setting.is_secret() {
                    mask_secret(raw)
                } else {
                    raw.to_string()
                },
                layer: resolved.map(|r| r.layer.as_str()),
                key: resolved.map(|r| r.key),
            }
        })
        .collect();

    ConfigReport {
        config_file: config.config_file().map(|p| p.display().to_string()),
        settings,
    }
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let report = build_report(&config);

        if self.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Library(e.into()))?;
            println!("{json}");
            return Ok(());
        }

        if let Some(path) = config.config_file() {
            println!("# config file: {}", shorten_path(path));
        }
        for setting in &report.settings {
            match (self.sources, setting.layer, setting.key) {
                (true, Some(layer), Some(key)) => {
                    println!("{:<16} {}  ({layer}: {key})", setting.name, setting.value);
                }
                _ => println!("{:<16} {}", setting.name, setting.value),
            }
        }
        Ok(())
    }
}
