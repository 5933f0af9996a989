use anyhow::Result;
use print_cost::config::Config;
use print_cost::pricing::PricingEngine;
use print_cost::render::OutputFormat;
use print_cost::session::Session;
use std::io;
use tracing::info;

/// Execute the session command
///
/// Runs the interactive form on stdin/stdout until `quit` or end of input.
pub fn execute(format: &str, cfg: &Config) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    info!("Starting interactive session");

    let mut session = Session::new(
        PricingEngine::default(),
        cfg.defaults.clone(),
        cfg.display.clone(),
        format,
    );

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())?;

    info!("Session ended");
    Ok(())
}
