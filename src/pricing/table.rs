use super::models::{FilamentBrand, FilamentType};
use serde::Serialize;
use std::collections::HashMap;

/// Price per kilogram for every stocked (type, brand) pair
#[derive(Debug, Clone, PartialEq)]
pub struct FilamentPriceTable {
    prices: HashMap<(FilamentType, FilamentBrand), f64>,
}

impl FilamentPriceTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    /// Return the table with one more entry (or a replaced one)
    pub fn with_price(
        mut self,
        filament_type: FilamentType,
        brand: FilamentBrand,
        price_per_kg: f64,
    ) -> Self {
        self.prices.insert((filament_type, brand), price_per_kg);
        self
    }

    /// Return the table without the given entry
    pub fn without(mut self, filament_type: &FilamentType, brand: &FilamentBrand) -> Self {
        self.prices.remove(&(filament_type.clone(), brand.clone()));
        self
    }

    /// Price per kilogram, if the pair is stocked
    pub fn price_per_kg(&self, filament_type: &FilamentType, brand: &FilamentBrand) -> Option<f64> {
        self.prices.get(&(filament_type.clone(), brand.clone())).copied()
    }

    /// Rows in catalog order: one per known type, with a price per known brand
    pub fn rows(&self) -> Vec<(FilamentType, Vec<Option<f64>>)> {
        FilamentType::KNOWN
            .iter()
            .map(|t| {
                let prices = FilamentBrand::KNOWN
                    .iter()
                    .map(|b| self.price_per_kg(t, b))
                    .collect();
                (t.clone(), prices)
            })
            .collect()
    }
}

impl Default for FilamentPriceTable {
    /// The stocked catalog
    fn default() -> Self {
        use FilamentBrand::*;
        use FilamentType::*;

        Self::new()
            .with_price(PlaHs, ESun, 1574.0)
            .with_price(PlaHs, BambuLab, 2600.0)
            .with_price(PlaHs, SunLu, 1560.0)
            .with_price(Petg, ESun, 1824.0)
            .with_price(Petg, BambuLab, 2850.0)
            .with_price(Petg, SunLu, 1810.0)
            .with_price(Abs, ESun, 1824.0)
            .with_price(Abs, BambuLab, 2850.0)
            .with_price(Abs, SunLu, 1810.0)
    }
}

/// A named monthly overhead bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedExpense {
    pub name: &'static str,
    pub monthly_amount: f64,
}

/// Monthly fixed overhead, spread across the month's jobs
pub const FIXED_EXPENSES: [FixedExpense; 4] = [
    FixedExpense { name: "Internet & software", monthly_amount: 1300.0 },
    FixedExpense { name: "Workshop rent", monthly_amount: 12000.0 },
    FixedExpense { name: "Utilities", monthly_amount: 6000.0 },
    FixedExpense { name: "Marketing", monthly_amount: 2000.0 },
];

/// Shop running costs that are not user-editable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingConstants {
    pub fixed_expenses: Vec<FixedExpense>,
    /// Currency per kWh
    pub electricity_rate: f64,
    /// Average printer draw in watts
    pub printer_wattage: f64,
    pub packaging_cost: f64,
    pub shipping_cost: f64,
    pub maintenance_per_job: f64,
    /// Floor margin used for the recommended minimum price (0.3 = 30%)
    pub floor_margin: f64,
}

impl OperatingConstants {
    /// Sum of all monthly fixed expense buckets
    pub fn total_monthly_fixed_costs(&self) -> f64 {
        self.fixed_expenses.iter().map(|e| e.monthly_amount).sum()
    }
}

impl Default for OperatingConstants {
    fn default() -> Self {
        Self {
            fixed_expenses: FIXED_EXPENSES.to_vec(),
            electricity_rate: 5.9,
            printer_wattage: 95.0,
            packaging_cost: 40.0,
            shipping_cost: 150.0,
            maintenance_per_job: 100.0,
            floor_margin: 0.3,
        }
    }
}
