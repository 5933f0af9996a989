use anyhow::Result;
use colored::Colorize;
use print_cost::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Prints the merged configuration (defaults, file and environment) as TOML
pub fn show(cfg: &Config) -> Result<()> {
    info!("Displaying configuration");

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
///
/// Loads the configuration again so that errors are reported here rather than
/// at startup.
pub fn validate(path: Option<&Path>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {} ({})", "Log".cyan(), cfg.log.level, cfg.log.format);
    println!("  {}: {}", "Currency".cyan(), cfg.display.currency_symbol);
    println!(
        "  {}: {} / {}",
        "Default Filament".cyan(),
        cfg.defaults.filament_type,
        cfg.defaults.filament_brand
    );
    println!(
        "  {}: {}% margin, {} jobs/month, {}% fixed cost",
        "Default Job".cyan(),
        cfg.defaults.profit_margin_percent,
        cfg.defaults.monthly_jobs,
        cfg.defaults.fixed_cost_usage_percent
    );

    info!("Configuration validation successful");
    Ok(())
}
