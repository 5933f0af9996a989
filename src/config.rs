use crate::error::{QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file read when `--config` is not given; it may be absent
pub const DEFAULT_CONFIG_FILE: &str = "print-cost.toml";

/// Environment variable prefix, e.g. `PRINT_COST__DISPLAY__COLOR=false`
pub const ENV_PREFIX: &str = "PRINT_COST";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub display: DisplayConfig,
    pub defaults: FormDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            color: true,
        }
    }
}

/// Initial values of a fresh form
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormDefaults {
    pub filament_type: String,
    pub filament_brand: String,
    pub profit_margin_percent: f64,
    pub monthly_jobs: f64,
    pub fixed_cost_usage_percent: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            filament_type: "PLA-HS".to_string(),
            filament_brand: "eSun".to_string(),
            profit_margin_percent: 35.0,
            monthly_jobs: 20.0,
            fixed_cost_usage_percent: 50.0,
        }
    }
}

/// Load configuration from built-in defaults, a TOML file and the environment
///
/// An explicitly given `path` must exist; otherwise [`DEFAULT_CONFIG_FILE`]
/// is read if present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
    };

    let config = config::Config::builder()
        .add_source(config::Config::try_from(&Config::default())?)
        .add_source(file)
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<()> {
    match cfg.log.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(QuoteError::Config(format!(
                "log.format must be 'text' or 'json', got '{}'",
                other
            )))
        }
    }

    if tracing_subscriber::EnvFilter::try_new(&cfg.log.level).is_err() {
        return Err(QuoteError::Config(format!(
            "log.level '{}' is not a valid filter",
            cfg.log.level
        )));
    }

    if cfg.display.currency_symbol.trim().is_empty() {
        return Err(QuoteError::Config(
            "display.currency_symbol cannot be empty".to_string(),
        ));
    }

    let numeric = [
        ("defaults.profit_margin_percent", cfg.defaults.profit_margin_percent),
        ("defaults.monthly_jobs", cfg.defaults.monthly_jobs),
        ("defaults.fixed_cost_usage_percent", cfg.defaults.fixed_cost_usage_percent),
    ];
    for (name, value) in numeric {
        if !value.is_finite() || value < 0.0 {
            return Err(QuoteError::Config(format!(
                "{} must be a non-negative number, got {}",
                name, value
            )));
        }
    }

    if cfg.defaults.monthly_jobs == 0.0 {
        return Err(QuoteError::Config(
            "defaults.monthly_jobs must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
