use crate::pricing::models::{JobInput, PricingBreakdown};
use crate::pricing::table::{FilamentPriceTable, OperatingConstants};
use tracing::{debug, warn};

/// Computes a price recommendation from job parameters
///
/// Holds only read-only pricing data, so one engine can serve any number of
/// quotes; every call to [`PricingEngine::compute`] is independent.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    table: FilamentPriceTable,
    constants: OperatingConstants,
}

impl PricingEngine {
    /// Create an engine over custom pricing data
    pub fn new(table: FilamentPriceTable, constants: OperatingConstants) -> Self {
        Self { table, constants }
    }

    pub fn table(&self) -> &FilamentPriceTable {
        &self.table
    }

    pub fn constants(&self) -> &OperatingConstants {
        &self.constants
    }

    /// Fixed overhead carried by one job
    ///
    /// Returns 0 when `monthly_jobs` is not a positive finite number.
    pub fn fixed_cost_per_job(&self, monthly_jobs: f64) -> f64 {
        if !(monthly_jobs.is_finite() && monthly_jobs > 0.0) {
            warn!(monthly_jobs, "Monthly job count is not positive, allocating no fixed cost");
            return 0.0;
        }
        self.constants.total_monthly_fixed_costs() / monthly_jobs
    }

    /// Calculate the cost breakdown for a job
    ///
    /// Never fails: an unstocked filament contributes zero filament cost and a
    /// non-positive job count contributes zero fixed cost.
    pub fn compute(&self, input: &JobInput) -> PricingBreakdown {
        let c = &self.constants;

        let filament_unit_price = match self
            .table
            .price_per_kg(&input.filament_type, &input.filament_brand)
        {
            Some(price) => price,
            None => {
                warn!(
                    "No filament price for {} / {}, using 0",
                    input.filament_type, input.filament_brand
                );
                0.0
            }
        };

        let fixed_cost_per_job = self.fixed_cost_per_job(input.monthly_jobs);

        let electricity_cost =
            (input.print_hours * c.printer_wattage / 1000.0) * c.electricity_rate;
        let filament_cost = (input.filament_grams / 1000.0) * filament_unit_price;
        let depreciation_cost = input.depreciation_per_hour * input.print_hours;
        let maintenance_cost = c.maintenance_per_job;
        let allocated_fixed_cost = fixed_cost_per_job * (input.fixed_cost_usage_percent / 100.0);

        let core_cost = electricity_cost
            + filament_cost
            + maintenance_cost
            + depreciation_cost
            + allocated_fixed_cost;

        let logistics = c.packaging_cost + c.shipping_cost;
        let subtotal_with_margin = core_cost * (1.0 + input.profit_margin_percent / 100.0);
        let final_price = subtotal_with_margin + logistics;
        let recommended_minimum_price = core_cost * (1.0 + c.floor_margin) + logistics;
        let is_underpriced = final_price < recommended_minimum_price;

        debug!(
            filament_type = %input.filament_type,
            filament_brand = %input.filament_brand,
            core_cost,
            final_price,
            recommended_minimum_price,
            is_underpriced,
            "Computed job price"
        );

        PricingBreakdown {
            filament_unit_price,
            electricity_cost,
            filament_cost,
            depreciation_cost,
            maintenance_cost,
            fixed_cost_per_job,
            allocated_fixed_cost,
            core_cost,
            subtotal_with_margin,
            packaging_cost: c.packaging_cost,
            shipping_cost: c.shipping_cost,
            final_price,
            recommended_minimum_price,
            is_underpriced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{FilamentBrand, FilamentType};

    const EPS: f64 = 1e-9;

    fn sample_job() -> JobInput {
        JobInput {
            print_hours: 10.0,
            filament_grams: 200.0,
            filament_type: FilamentType::PlaHs,
            filament_brand: FilamentBrand::ESun,
            depreciation_per_hour: 5.0,
            profit_margin_percent: 35.0,
            monthly_jobs: 20.0,
            fixed_cost_usage_percent: 50.0,
        }
    }

    #[test]
    fn test_reference_job() {
        let engine = PricingEngine::default();
        let b = engine.compute(&sample_job());

        assert_eq!(b.filament_unit_price, 1574.0);
        assert!((b.filament_cost - 314.8).abs() < EPS);
        assert!((b.electricity_cost - 5.605).abs() < EPS);
        assert_eq!(b.depreciation_cost, 50.0);
        assert_eq!(b.maintenance_cost, 100.0);
        assert_eq!(b.fixed_cost_per_job, 1065.0);
        assert_eq!(b.allocated_fixed_cost, 532.5);
        assert!((b.core_cost - 1002.905).abs() < EPS);
        assert!((b.subtotal_with_margin - 1353.92175).abs() < EPS);
        assert!((b.final_price - 1543.92175).abs() < EPS);
        assert!((b.recommended_minimum_price - 1493.7765).abs() < EPS);
        assert!(!b.is_underpriced);
    }

    #[test]
    fn test_core_cost_is_sum_of_line_items() {
        let engine = PricingEngine::default();
        let mut job = sample_job();
        job.filament_type = FilamentType::Petg;
        job.filament_brand = FilamentBrand::BambuLab;
        job.print_hours = 3.5;

        let b = engine.compute(&job);
        assert_eq!(
            b.core_cost,
            b.electricity_cost
                + b.filament_cost
                + b.maintenance_cost
                + b.depreciation_cost
                + b.allocated_fixed_cost
        );
    }

    #[test]
    fn test_low_margin_is_underpriced() {
        let engine = PricingEngine::default();
        let mut job = sample_job();
        job.profit_margin_percent = 10.0;

        let b = engine.compute(&job);
        assert!(b.is_underpriced);
        assert!(b.final_price < b.recommended_minimum_price);
    }

    #[test]
    fn test_zero_monthly_jobs_allocates_nothing() {
        let engine = PricingEngine::default();
        let mut job = sample_job();
        job.monthly_jobs = 0.0;

        let b = engine.compute(&job);
        assert_eq!(b.fixed_cost_per_job, 0.0);
        assert_eq!(b.allocated_fixed_cost, 0.0);
        assert!(b.final_price.is_finite());
        assert!(b.recommended_minimum_price.is_finite());
    }

    #[test]
    fn test_negative_monthly_jobs_allocates_nothing() {
        let engine = PricingEngine::default();
        assert_eq!(engine.fixed_cost_per_job(-4.0), 0.0);
        assert_eq!(engine.fixed_cost_per_job(f64::NAN), 0.0);
        assert_eq!(engine.fixed_cost_per_job(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_unknown_brand_has_no_filament_cost() {
        let engine = PricingEngine::default();
        let mut job = sample_job();
        job.filament_brand = FilamentBrand::Other("Polymaker".to_string());
        job.filament_grams = 5000.0;

        let b = engine.compute(&job);
        assert_eq!(b.filament_unit_price, 0.0);
        assert_eq!(b.filament_cost, 0.0);
    }

    #[test]
    fn test_pair_missing_from_custom_table() {
        let table =
            FilamentPriceTable::default().without(&FilamentType::PlaHs, &FilamentBrand::ESun);
        let engine = PricingEngine::new(table, OperatingConstants::default());

        let b = engine.compute(&sample_job());
        assert_eq!(b.filament_cost, 0.0);
        assert!((b.core_cost - (1002.905 - 314.8)).abs() < EPS);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let engine = PricingEngine::default();
        let job = sample_job();
        assert_eq!(engine.compute(&job), engine.compute(&job));
    }
}
