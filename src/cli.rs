use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "confticket")]
#[command(about = "Conference ticket generator")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in the ticket form interactively (default)
    Form,

    /// Generate a ticket without the interactive form
    #[command(visible_alias = "g")]
    Generate {
        /// Full name printed on the ticket
        #[arg(long, default_value = "")]
        full_name: String,

        /// Where the ticket is "sent"
        #[arg(long, default_value = "")]
        email: String,

        /// GitHub username, shown as @username
        #[arg(long, default_value = "")]
        username: String,

        /// Avatar image (JPG or PNG, max size: 500KB); repeat to drop several files
        #[arg(long)]
        avatar: Vec<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file path
    Path,

    /// Get a configuration value
    Get {
        /// Key (event.name, event.location, event.year)
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key (event.name, event.location, event.year)
        key: String,

        /// New value
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
