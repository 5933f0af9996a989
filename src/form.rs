//! Editable job form
//!
//! A [`JobForm`] holds the raw text a user typed into each field. It belongs
//! to one session; edits replace a whole field at a time. Converting it to a
//! [`JobInput`] applies the coercion rules:
//!
//! - empty numeric fields read as 0
//! - text that is not a finite number reads as 0 and adds a warning
//! - filament names outside the catalog are kept and add a warning (the
//!   engine prices them at 0)
//! - a monthly job count that is not positive adds a warning (the engine
//!   allocates no fixed cost)

use crate::config::FormDefaults;
use crate::error::{QuoteError, Result};
use crate::pricing::{FilamentBrand, FilamentType, JobInput};
use crate::warnings::InputWarnings;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// A single input on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    PrintHours,
    FilamentGrams,
    FilamentType,
    FilamentBrand,
    DepreciationPerHour,
    ProfitMarginPercent,
    MonthlyJobs,
    FixedCostUsagePercent,
}

impl FormField {
    /// Fields in form order
    pub const ALL: [FormField; 8] = [
        FormField::PrintHours,
        FormField::FilamentGrams,
        FormField::FilamentType,
        FormField::FilamentBrand,
        FormField::DepreciationPerHour,
        FormField::ProfitMarginPercent,
        FormField::MonthlyJobs,
        FormField::FixedCostUsagePercent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::PrintHours => "print_hours",
            Self::FilamentGrams => "filament_grams",
            Self::FilamentType => "filament_type",
            Self::FilamentBrand => "filament_brand",
            Self::DepreciationPerHour => "depreciation_per_hour",
            Self::ProfitMarginPercent => "profit_margin_percent",
            Self::MonthlyJobs => "monthly_jobs",
            Self::FixedCostUsagePercent => "fixed_cost_usage_percent",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrintHours => "Print Hours",
            Self::FilamentGrams => "Filament Used (g)",
            Self::FilamentType => "Filament Type",
            Self::FilamentBrand => "Filament Brand",
            Self::DepreciationPerHour => "Depreciation per Hour",
            Self::ProfitMarginPercent => "Profit Margin (%)",
            Self::MonthlyJobs => "Monthly Print Jobs",
            Self::FixedCostUsagePercent => "% Fixed Cost Used Per Job",
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::FilamentType | Self::FilamentBrand)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = QuoteError;

    /// Accepts the canonical name, a short alias, and `-` in place of `_`
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let field = match key.as_str() {
            "print_hours" | "hours" => Self::PrintHours,
            "filament_grams" | "grams" => Self::FilamentGrams,
            "filament_type" | "type" => Self::FilamentType,
            "filament_brand" | "brand" => Self::FilamentBrand,
            "depreciation_per_hour" | "depreciation" => Self::DepreciationPerHour,
            "profit_margin_percent" | "profit_margin" | "margin" => Self::ProfitMarginPercent,
            "monthly_jobs" | "jobs" => Self::MonthlyJobs,
            "fixed_cost_usage_percent" | "fixed_cost_usage" | "fixed_usage" => {
                Self::FixedCostUsagePercent
            }
            _ => return Err(QuoteError::UnknownField(s.trim().to_string())),
        };
        Ok(field)
    }
}

/// Raw text for every form field
#[derive(Debug, Clone, PartialEq)]
pub struct JobForm {
    values: [String; 8],
}

impl JobForm {
    /// A fresh form: job-specific fields empty, the rest from `defaults`
    pub fn new(defaults: &FormDefaults) -> Self {
        let mut form = Self {
            values: Default::default(),
        };
        form.set(FormField::FilamentType, defaults.filament_type.clone());
        form.set(FormField::FilamentBrand, defaults.filament_brand.clone());
        form.set(
            FormField::ProfitMarginPercent,
            defaults.profit_margin_percent.to_string(),
        );
        form.set(FormField::MonthlyJobs, defaults.monthly_jobs.to_string());
        form.set(
            FormField::FixedCostUsagePercent,
            defaults.fixed_cost_usage_percent.to_string(),
        );
        form
    }

    fn index(field: FormField) -> usize {
        field as usize
    }

    pub fn get(&self, field: FormField) -> &str {
        &self.values[Self::index(field)]
    }

    /// Replace the text of one field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values[Self::index(field)] = value.into();
    }

    /// Replace a field by name, as typed by a user
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<FormField> {
        let field: FormField = name.parse()?;
        self.set(field, value.trim());
        Ok(field)
    }

    /// Apply a `field=value` assignment
    pub fn apply_assignment(&mut self, line: &str) -> Result<FormField> {
        match line.split_once('=') {
            Some((name, value)) => self.set_field(name, value),
            None => Err(QuoteError::UnknownField(line.trim().to_string())),
        }
    }

    /// Coerce the form into a job, collecting a warning per coercion
    pub fn to_job_input(&self) -> (JobInput, InputWarnings) {
        let mut warnings = InputWarnings::new();

        let mut number = |field: FormField| -> f64 {
            let text = self.get(field);
            match parse_number(text) {
                Some(value) => value,
                None => {
                    warn!(field = field.name(), value = text, "Invalid number, using 0");
                    warnings.add_invalid_number(field.name(), text);
                    0.0
                }
            }
        };

        let print_hours = number(FormField::PrintHours);
        let filament_grams = number(FormField::FilamentGrams);
        let depreciation_per_hour = number(FormField::DepreciationPerHour);
        let profit_margin_percent = number(FormField::ProfitMarginPercent);
        let monthly_jobs = number(FormField::MonthlyJobs);
        let fixed_cost_usage_percent = number(FormField::FixedCostUsagePercent);

        let type_text = self.get(FormField::FilamentType);
        let filament_type: FilamentType = type_text.to_string().into();
        if !filament_type.is_known() {
            warnings.add_unknown_filament(FormField::FilamentType.name(), type_text);
        }

        let brand_text = self.get(FormField::FilamentBrand);
        let filament_brand: FilamentBrand = brand_text.to_string().into();
        if !filament_brand.is_known() {
            warnings.add_unknown_filament(FormField::FilamentBrand.name(), brand_text);
        }

        if monthly_jobs <= 0.0 {
            warnings.add_no_monthly_jobs(FormField::MonthlyJobs.name());
        }

        if fixed_cost_usage_percent > 100.0 {
            warnings.add_info(
                FormField::FixedCostUsagePercent.name(),
                format!(
                    "{}% is more than the whole monthly overhead",
                    fixed_cost_usage_percent
                ),
            );
        }

        let input = JobInput {
            print_hours,
            filament_grams,
            filament_type,
            filament_brand,
            depreciation_per_hour,
            profit_margin_percent,
            monthly_jobs,
            fixed_cost_usage_percent,
        };

        (input, warnings)
    }
}

impl Default for JobForm {
    fn default() -> Self {
        Self::new(&FormDefaults::default())
    }
}

/// Read numeric form text
///
/// Empty text is 0. Returns `None` for anything that is not a finite number.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
