use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "print-cost", version, about = "3D print job cost calculator")]
pub struct Cli {
    /// Configuration file path (defaults to ./print-cost.toml if present)
    #[arg(short, long, global = true, env = "PRINT_COST_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a single job from command-line fields
    Quote(crate::commands::quote::QuoteArgs),

    /// Edit a job form interactively, re-pricing after every change (default)
    Session {
        /// Output format (text, json)
        #[arg(short = 'f', long, default_value = "text")]
        format: String,
    },

    /// Show the filament price table
    Table,

    /// Show the operating constants
    Constants,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to an interactive session
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Session {
            format: "text".to_string(),
        })
    }
}
