use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use print_cost::config::{self, LogConfig};
use print_cost::init_tracing;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // Validation must report a broken config instead of failing on load
    if let cli::Commands::Config {
        action: cli::ConfigCommands::Validate,
    } = command
    {
        init_tracing(&LogConfig::default());
        return commands::config::validate(args.config.as_deref());
    }

    let cfg = config::load_config(args.config.as_deref())?;
    init_tracing(&cfg.log);
    if !cfg.display.color {
        colored::control::set_override(false);
    }

    match command {
        cli::Commands::Quote(quote_args) => commands::quote::execute(quote_args, &cfg)?,
        cli::Commands::Session { format } => commands::session::execute(&format, &cfg)?,
        cli::Commands::Table => commands::catalog::table(&cfg)?,
        cli::Commands::Constants => commands::catalog::constants(&cfg)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
            cli::ConfigCommands::Validate => commands::config::validate(args.config.as_deref())?,
        },
        cli::Commands::Version => {
            println!("print-cost v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
