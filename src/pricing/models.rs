use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filament material offered by the print service
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FilamentType {
    #[default]
    PlaHs,
    Petg,
    Abs,
    /// Material name outside the known catalog
    Other(String),
}

impl FilamentType {
    /// Known materials in display order
    pub const KNOWN: [FilamentType; 3] =
        [FilamentType::PlaHs, FilamentType::Petg, FilamentType::Abs];

    pub fn as_str(&self) -> &str {
        match self {
            Self::PlaHs => "PLA-HS",
            Self::Petg => "PETG",
            Self::Abs => "ABS",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FilamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilamentType {
    type Err = std::convert::Infallible;

    /// Names match case-insensitively; anything else is kept as `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_ascii_uppercase().as_str() {
            "PLA-HS" => Self::PlaHs,
            "PETG" => Self::Petg,
            "ABS" => Self::Abs,
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

impl From<String> for FilamentType {
    fn from(s: String) -> Self {
        match s.parse::<Self>() {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }
}

impl From<FilamentType> for String {
    fn from(t: FilamentType) -> Self {
        t.as_str().to_string()
    }
}

/// Filament manufacturer
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FilamentBrand {
    #[default]
    ESun,
    BambuLab,
    SunLu,
    /// Brand name outside the known catalog
    Other(String),
}

impl FilamentBrand {
    /// Known brands in display order
    pub const KNOWN: [FilamentBrand; 3] =
        [FilamentBrand::ESun, FilamentBrand::BambuLab, FilamentBrand::SunLu];

    pub fn as_str(&self) -> &str {
        match self {
            Self::ESun => "eSun",
            Self::BambuLab => "Bambu Lab",
            Self::SunLu => "SunLu",
            Self::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for FilamentBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilamentBrand {
    type Err = std::convert::Infallible;

    /// Case and inner whitespace are ignored, so "bambulab" and "Bambu Lab" agree
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();

        Ok(match key.as_str() {
            "esun" => Self::ESun,
            "bambulab" => Self::BambuLab,
            "sunlu" => Self::SunLu,
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

impl From<String> for FilamentBrand {
    fn from(s: String) -> Self {
        match s.parse::<Self>() {
            Ok(parsed) => parsed,
            Err(never) => match never {},
        }
    }
}

impl From<FilamentBrand> for String {
    fn from(b: FilamentBrand) -> Self {
        b.as_str().to_string()
    }
}

/// Parameters of a single print job, already coerced to numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobInput {
    pub print_hours: f64,
    pub filament_grams: f64,
    pub filament_type: FilamentType,
    pub filament_brand: FilamentBrand,
    pub depreciation_per_hour: f64,
    pub profit_margin_percent: f64,
    pub monthly_jobs: f64,
    pub fixed_cost_usage_percent: f64,
}

/// Cost breakdown and price recommendation for a job
///
/// Values keep full precision; rounding happens only when rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingBreakdown {
    pub filament_unit_price: f64,
    pub electricity_cost: f64,
    pub filament_cost: f64,
    pub depreciation_cost: f64,
    pub maintenance_cost: f64,
    pub fixed_cost_per_job: f64,
    pub allocated_fixed_cost: f64,
    pub core_cost: f64,
    pub subtotal_with_margin: f64,
    pub packaging_cost: f64,
    pub shipping_cost: f64,
    pub final_price: f64,
    pub recommended_minimum_price: f64,
    pub is_underpriced: bool,
}

impl PricingBreakdown {
    /// Sum of the five cost line items
    pub fn line_items_total(&self) -> f64 {
        self.electricity_cost
            + self.filament_cost
            + self.maintenance_cost
            + self.depreciation_cost
            + self.allocated_fixed_cost
    }
}
