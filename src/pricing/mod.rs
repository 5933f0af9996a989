pub mod calculator;
pub mod models;
pub mod table;

pub use calculator::PricingEngine;
pub use models::{FilamentBrand, FilamentType, JobInput, PricingBreakdown};
pub use table::{FilamentPriceTable, FixedExpense, OperatingConstants};
