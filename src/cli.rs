//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;

/// banner-counter - banner click counter with per-minute statistics
#[derive(Parser, Debug)]
#[command(name = "banner-counter")]
#[command(version)]
#[command(about = "Banner click counter with per-minute statistics", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Apply database migrations and exit
    Migrate,

    /// Generate a sample configuration file
    GenerateConfig {
        /// Output file path (prints to stdout when omitted)
        output: Option<String>,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }
}
