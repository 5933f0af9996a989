//! Quote command
//!
//! Fills a fresh form from command-line flags and prints one price.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use print_cost::config::Config;
use print_cost::form::{FormField, JobForm};
use print_cost::pricing::PricingEngine;
use print_cost::render::{self, OutputFormat};
use tracing::info;

/// Job fields; numbers are taken as text and coerced like form input
#[derive(Debug, Clone, Parser)]
pub struct QuoteArgs {
    /// Print time in hours
    #[arg(long)]
    pub hours: Option<String>,

    /// Filament used in grams
    #[arg(long)]
    pub grams: Option<String>,

    /// Filament type (PLA-HS, PETG, ABS)
    #[arg(long = "type")]
    pub filament_type: Option<String>,

    /// Filament brand (eSun, "Bambu Lab", SunLu)
    #[arg(long)]
    pub brand: Option<String>,

    /// Machine depreciation per print hour
    #[arg(long)]
    pub depreciation: Option<String>,

    /// Profit margin in percent
    #[arg(long)]
    pub margin: Option<String>,

    /// Planned print jobs per month
    #[arg(long)]
    pub monthly_jobs: Option<String>,

    /// Share of monthly fixed costs used by this job, in percent
    #[arg(long)]
    pub fixed_usage: Option<String>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: String,
}

impl QuoteArgs {
    /// Overlay the given flags on a default form
    pub fn to_form(&self, cfg: &Config) -> JobForm {
        let mut form = JobForm::new(&cfg.defaults);
        let fields = [
            (FormField::PrintHours, &self.hours),
            (FormField::FilamentGrams, &self.grams),
            (FormField::FilamentType, &self.filament_type),
            (FormField::FilamentBrand, &self.brand),
            (FormField::DepreciationPerHour, &self.depreciation),
            (FormField::ProfitMarginPercent, &self.margin),
            (FormField::MonthlyJobs, &self.monthly_jobs),
            (FormField::FixedCostUsagePercent, &self.fixed_usage),
        ];
        for (field, value) in fields {
            if let Some(v) = value {
                form.set(field, v.trim());
            }
        }
        form
    }
}

/// Execute the quote command
pub fn execute(args: QuoteArgs, cfg: &Config) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let form = args.to_form(cfg);
    let (input, warnings) = form.to_job_input();

    info!(
        filament_type = %input.filament_type,
        filament_brand = %input.filament_brand,
        "Pricing job"
    );
    let breakdown = PricingEngine::default().compute(&input);

    match format {
        OutputFormat::Json => {
            println!("{}", render::render_json(&input, &breakdown, &warnings)?);
        }
        OutputFormat::Text => {
            if !warnings.is_empty() {
                println!("{}", "Input warnings:".yellow().bold());
                print!("{}", render::render_warnings(&warnings));
                println!();
            }
            println!("{}", "Cost Breakdown:".green().bold());
            print!("{}", render::render_breakdown(&breakdown, &cfg.display));
        }
    }

    Ok(())
}
