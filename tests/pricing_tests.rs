/// Integration tests for job pricing through the public API
use print_cost::{
    config::{DisplayConfig, FormDefaults},
    form::JobForm,
    pricing::{
        FilamentBrand, FilamentPriceTable, FilamentType, JobInput, OperatingConstants,
        PricingEngine,
    },
    render::{self, OutputFormat},
    session::{Session, Step},
};

const EPS: f64 = 1e-9;

fn reference_job() -> JobInput {
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

fn jobs() -> Vec<JobInput> {
    let mut out = Vec::new();
    for filament_type in FilamentType::KNOWN {
        for filament_brand in FilamentBrand::KNOWN {
            for (hours, margin, jobs, usage) in [
                (0.0, 0.0, 1.0, 0.0),
                (2.5, 20.0, 8.0, 25.0),
                (10.0, 35.0, 20.0, 50.0),
                (48.0, 120.0, 3.0, 100.0),
            ] {
                out.push(JobInput {
                    print_hours: hours,
                    filament_grams: hours * 17.0,
                    filament_type: filament_type.clone(),
                    filament_brand: filament_brand.clone(),
                    depreciation_per_hour: 4.0,
                    profit_margin_percent: margin,
                    monthly_jobs: jobs,
                    fixed_cost_usage_percent: usage,
                });
            }
        }
    }
    out
}

#[test]
fn test_reference_scenario() {
    let b = PricingEngine::default().compute(&reference_job());

    assert_eq!(b.filament_unit_price, 1574.0);
    assert!((b.filament_cost - 314.8).abs() < EPS);
    assert!((b.electricity_cost - 5.605).abs() < EPS);
    assert_eq!(b.depreciation_cost, 50.0);
    assert_eq!(b.fixed_cost_per_job, 1065.0);
    assert_eq!(b.allocated_fixed_cost, 532.5);
    assert!((b.core_cost - 1002.905).abs() < EPS);
    assert!((b.subtotal_with_margin - 1353.92175).abs() < EPS);
    assert!((b.final_price - 1543.92175).abs() < EPS);
    assert!((b.recommended_minimum_price - 1493.7765).abs() < EPS);
    assert!(!b.is_underpriced);
}

#[test]
fn test_price_identities_hold_for_every_job() {
    let engine = PricingEngine::default();
    let constants = OperatingConstants::default();
    let logistics = constants.packaging_cost + constants.shipping_cost;

    for job in jobs() {
        let b = engine.compute(&job);

        assert_eq!(
            b.core_cost,
            b.electricity_cost
                + b.filament_cost
                + b.maintenance_cost
                + b.depreciation_cost
                + b.allocated_fixed_cost
        );
        assert_eq!(b.core_cost, b.line_items_total());
        assert_eq!(
            b.final_price,
            b.core_cost * (1.0 + job.profit_margin_percent / 100.0) + logistics
        );
        assert_eq!(b.is_underpriced, b.final_price < b.core_cost * 1.3 + logistics);
        assert_eq!(engine.compute(&job), b);
    }
}

#[test]
fn test_zero_monthly_jobs_stays_finite() {
    let mut job = reference_job();
    job.monthly_jobs = 0.0;

    let b = PricingEngine::default().compute(&job);
    assert!(b.final_price.is_finite());
    assert!(!b.final_price.is_nan());
    assert_eq!(b.allocated_fixed_cost, 0.0);
    assert!((b.core_cost - (1002.905 - 532.5)).abs() < EPS);
}

#[test]
fn test_brand_missing_for_type_has_no_filament_cost() {
    let table = FilamentPriceTable::default().without(&FilamentType::Petg, &FilamentBrand::SunLu);
    let engine = PricingEngine::new(table, OperatingConstants::default());

    let mut job = reference_job();
    job.filament_type = FilamentType::Petg;
    job.filament_brand = FilamentBrand::SunLu;

    for grams in [0.0, 200.0, 12_000.0] {
        job.filament_grams = grams;
        assert_eq!(engine.compute(&job).filament_cost, 0.0);
    }
}

#[test]
fn test_unknown_brand_text_from_form() {
    let mut form = JobForm::default();
    form.set_field("grams", "500").unwrap();
    form.set_field("brand", "Prusament").unwrap();

    let (input, warnings) = form.to_job_input();
    let b = PricingEngine::default().compute(&input);

    assert_eq!(b.filament_cost, 0.0);
    assert_eq!(warnings.for_field("filament_brand").count(), 1);
}

#[test]
fn test_form_to_json_quote() {
    let mut form = JobForm::default();
    form.set_field("hours", "10").unwrap();
    form.set_field("grams", "200").unwrap();
    form.set_field("depreciation", "five").unwrap();

    let (input, warnings) = form.to_job_input();
    let b = PricingEngine::default().compute(&input);
    let json = render::render_json(&input, &b, &warnings).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["breakdown"]["depreciation_cost"], 0.0);
    assert_eq!(value["warnings"][0]["field"], "depreciation_per_hour");
}

#[test]
fn test_session_transcript() {
    let mut session = Session::new(
        PricingEngine::default(),
        FormDefaults::default(),
        DisplayConfig::default(),
        OutputFormat::Text,
    );

    for line in ["hours=10", "grams=200", "depreciation=5"] {
        assert!(matches!(session.handle_line(line).unwrap(), Step::Continue(_)));
    }

    match session.handle_line("margin=10").unwrap() {
        Step::Continue(text) => assert!(text.contains("underpriced")),
        Step::Quit => panic!("Expected Continue"),
    }
    match session.handle_line("margin=35").unwrap() {
        Step::Continue(text) => {
            assert!(text.contains("1543.92"));
            assert!(!text.contains("underpriced"));
        }
        Step::Quit => panic!("Expected Continue"),
    }
}
