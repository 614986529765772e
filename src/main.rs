use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use confticket::cli::{Cli, Commands, ConfigAction};
use confticket::commands::{
    GenerateOptions, cmd_config_get, cmd_config_path, cmd_config_set, cmd_config_show, cmd_form,
    cmd_generate,
};

/// Environment variable holding the log filter, e.g. `confticket=debug`
const LOG_ENV: &str = "CONFTICKET_LOG";

fn init_tracing() {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Form) {
        Commands::Form => cmd_form(),

        Commands::Generate {
            full_name,
            email,
            username,
            avatar,
            json,
        } => cmd_generate(GenerateOptions {
            full_name,
            email,
            username,
            avatars: avatar,
            json,
        }),

        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Path => cmd_config_path(),
            ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
