//! Terminal and JSON presentation of quotes
//!
//! Amounts are rounded to two decimals here and nowhere else.

use crate::config::DisplayConfig;
use crate::error::{QuoteError, Result};
use crate::form::{FormField, JobForm};
use crate::pricing::{
    FilamentBrand, FilamentPriceTable, JobInput, OperatingConstants, PricingBreakdown,
};
use crate::warnings::{InputWarnings, Warning};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

/// How a quote is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(QuoteError::InvalidFormat(other.to_string())),
        }
    }
}

/// Everything needed to reproduce a quote
#[derive(Debug, Clone, Serialize)]
pub struct QuoteReport<'a> {
    pub input: &'a JobInput,
    pub breakdown: &'a PricingBreakdown,
    pub warnings: &'a [Warning],
}

/// Format an amount with the currency symbol, e.g. `₹1543.92`
///
/// Negative zero prints as `0.00`.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount + 0.0)
}

/// Multi-line breakdown, ending with the underpricing warning when it applies
pub fn render_breakdown(breakdown: &PricingBreakdown, display: &DisplayConfig) -> String {
    let money = |amount: f64| format_money(&display.currency_symbol, amount);
    let mut out = String::new();

    let lines = [
        ("Electricity Cost", breakdown.electricity_cost),
        ("Filament Cost", breakdown.filament_cost),
        ("Depreciation Cost", breakdown.depreciation_cost),
        ("Maintenance", breakdown.maintenance_cost),
        ("Fixed Cost Allocated", breakdown.allocated_fixed_cost),
    ];
    for (label, amount) in lines {
        let _ = writeln!(out, "  {}: {}", label.cyan(), money(amount));
    }

    let _ = writeln!(
        out,
        "  {}: {}",
        "Subtotal + Margin (Before Logistics)".bold(),
        money(breakdown.subtotal_with_margin)
    );
    let _ = writeln!(out, "  {}: {}", "Packaging".cyan(), money(breakdown.packaging_cost));
    let _ = writeln!(out, "  {}: {}", "Shipping".cyan(), money(breakdown.shipping_cost));
    let _ = writeln!(
        out,
        "  {}: {}",
        "Final Price".green().bold(),
        money(breakdown.final_price).bold()
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        "Recommended Minimum".dimmed(),
        money(breakdown.recommended_minimum_price)
    );

    if breakdown.is_underpriced {
        let _ = writeln!(
            out,
            "  {}",
            "⚠ Warning: This job may be underpriced compared to breakeven + ideal margin."
                .red()
                .bold()
        );
    }

    out
}

/// One line per input warning
pub fn render_warnings(warnings: &InputWarnings) -> String {
    let mut out = String::new();
    for w in warnings.warnings() {
        let level = if w.level == "info" {
            w.level.blue()
        } else {
            w.level.yellow()
        };
        let _ = writeln!(out, "  {} [{}] {}", level, w.field, w.message);
    }
    out
}

/// Pretty JSON for a quote
pub fn render_json(
    input: &JobInput,
    breakdown: &PricingBreakdown,
    warnings: &InputWarnings,
) -> Result<String> {
    let report = QuoteReport {
        input,
        breakdown,
        warnings: warnings.warnings(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles.iter().map(|t| Cell::new(t).fg(Color::Cyan)).collect()
}

/// Filament prices per kg, one row per type and one column per brand
pub fn price_table(table: &FilamentPriceTable, symbol: &str) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let brands = FilamentBrand::KNOWN;
    let mut titles = vec!["TYPE"];
    titles.extend(brands.iter().map(|b| b.as_str()));
    out.set_header(header(&titles));

    for (filament_type, prices) in table.rows() {
        let mut row = vec![Cell::new(filament_type.as_str())];
        row.extend(prices.into_iter().map(|p| {
            let text = p.map(|v| format_money(symbol, v)).unwrap_or_else(|| "-".to_string());
            Cell::new(text).set_alignment(CellAlignment::Right)
        }));
        out.add_row(row);
    }

    out
}

/// Operating constants, including each fixed expense bucket
pub fn constants_table(constants: &OperatingConstants, symbol: &str) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(header(&["CONSTANT", "VALUE"]));

    for expense in &constants.fixed_expenses {
        out.add_row(vec![
            Cell::new(format!("Fixed: {}", expense.name)),
            Cell::new(format_money(symbol, expense.monthly_amount))
                .set_alignment(CellAlignment::Right),
        ]);
    }

    let rows = [
        ("Monthly fixed costs", format_money(symbol, constants.total_monthly_fixed_costs())),
        ("Electricity rate", format!("{}/kWh", format_money(symbol, constants.electricity_rate))),
        ("Printer wattage", format!("{} W", constants.printer_wattage)),
        ("Packaging", format_money(symbol, constants.packaging_cost)),
        ("Shipping", format_money(symbol, constants.shipping_cost)),
        ("Maintenance per job", format_money(symbol, constants.maintenance_per_job)),
        ("Floor margin", format!("{:.0}%", constants.floor_margin * 100.0)),
    ];
    for (name, value) in rows {
        out.add_row(vec![
            Cell::new(name),
            Cell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }

    out
}

/// Current form contents
pub fn form_table(form: &JobForm) -> Table {
    let mut out = Table::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(header(&["FIELD", "LABEL", "VALUE"]));

    for field in FormField::ALL {
        let value = form.get(field);
        let shown = if value.is_empty() && field.is_numeric() {
            Cell::new("(empty)").fg(Color::DarkGrey)
        } else {
            Cell::new(value)
        };
        out.add_row(vec![Cell::new(field.name()), Cell::new(field.label()), shown]);
    }

    out
}
