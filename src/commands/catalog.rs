use anyhow::Result;
use colored::Colorize;
use print_cost::config::Config;
use print_cost::pricing::PricingEngine;
use print_cost::render;

/// Execute the table command
pub fn table(cfg: &Config) -> Result<()> {
    let engine = PricingEngine::default();

    println!("{}", "Filament prices per kg:".green().bold());
    println!(
        "{}",
        render::price_table(engine.table(), &cfg.display.currency_symbol)
    );
    Ok(())
}

/// Execute the constants command
pub fn constants(cfg: &Config) -> Result<()> {
    let engine = PricingEngine::default();

    println!("{}", "Operating constants:".green().bold());
    println!(
        "{}",
        render::constants_table(engine.constants(), &cfg.display.currency_symbol)
    );
    Ok(())
}
