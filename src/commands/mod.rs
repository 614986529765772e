//! Command implementations behind the CLI

mod config;
mod form;
mod generate;

pub use config::{cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show};
pub use form::cmd_form;
pub use generate::{GenerateOptions, cmd_generate};

use serde_json::Value;

use crate::error::Result;

/// Output of a command in both its machine and human forms
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print JSON when requested, the text form otherwise
    pub fn print(self, json: bool) -> Result<()> {
        match (json, self.text) {
            (false, Some(text)) => println!("{text}"),
            _ => print_json(&self.json)?,
        }
        Ok(())
    }
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
