//! Configuration commands.
//!
//! - `config show`: Display the effective configuration
//! - `config path`: Print where the configuration lives
//! - `config get` / `config set`: Read or change a single key

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::{Config, ConfigKey};
use crate::error::Result;

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    let json_output = json!({
        "event": {
            "name": config.event.name,
            "location": config.event.location,
            "year": config.event.year,
        },
        "config_file": path.to_string_lossy(),
    });

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&config.to_yaml()?);
    text_output.push('\n');
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(json)
}

/// Print the config file location
pub fn cmd_config_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    let key: ConfigKey = key.parse()?;
    let value = Config::load()?.get(key);

    CommandOutput::new(json!({ "key": key.as_str(), "value": value }))
        .with_text(value)
        .print(json)
}

/// Set a configuration value and save the file
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    let key: ConfigKey = key.parse()?;

    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    let stored = config.get(key);
    tracing::debug!(%key, value = %stored, "config updated");

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key.as_str(),
        "value": stored,
        "success": true,
    }))
    .with_text(format!("Set {} to {}", key.as_str().cyan(), stored))
    .print(json)
}
