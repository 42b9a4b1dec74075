use excavator_cost_toolbox::cost::{
    amortization_schedule, compare_machines, environmental_equivalence, fuel_rate_for_mode,
    total_interest, CostInputs, RoiHorizon, WorkingMode, FUEL_RATE_TABLE,
};

fn scenario() -> CostInputs {
    CostInputs {
        price: 100_000.0,
        interest_rate: 12.0,
        loan_length_months: 48,
        downpayment_percent: 20.0,
        daily_operating_hours: 8.0,
        fuel_rate_liters_per_hour: 11.0,
    }
}

#[test]
fn competitor_savings_and_roi() {
    let c = compare_machines(scenario(), 11.0, 16.0).expect("comparison");
    assert_eq!(c.competitor.monthly_fuel_cost, 3840.0);
    assert!((c.monthly_fuel_savings - 1200.0).abs() < 1e-9);
    assert!((c.annual_fuel_savings - 14_400.0).abs() < 1e-9);
    assert!((c.annual_fuel_savings_liters - 14_400.0).abs() < 1e-9);
    assert!((c.total_monthly_savings - 1200.0).abs() < 1e-6);
    let years = c.roi.years().expect("positive savings");
    assert!((years - 100_000.0 / 14_400.0).abs() < 1e-9);
    assert!((years - 6.94).abs() < 0.01);
}

#[test]
fn no_savings_means_undefined_roi() {
    let same = compare_machines(scenario(), 11.0, 11.0).expect("comparison");
    assert_eq!(same.roi, RoiHorizon::Undefined);

    let worse = compare_machines(scenario(), 16.0, 11.0).expect("comparison");
    assert_eq!(worse.roi, RoiHorizon::Undefined);
    assert!(worse.monthly_fuel_savings < 0.0);
    assert!(worse.environmental_equivalence().co2_kg < 0.0);
}

#[test]
fn environmental_equivalence_constants() {
    let env = environmental_equivalence(14_400.0);
    assert!((env.co2_kg - 38_592.0).abs() < 1e-6);
    assert!((env.tree_years - 38_592.0 / 21.77).abs() < 1e-9);
    assert!((env.plastic_bottles - 38_592.0 / 0.082).abs() < 1e-6);

    let harm = environmental_equivalence(-100.0);
    assert!((harm.co2_kg + 268.0).abs() < 1e-9);
    assert!(harm.tree_years < 0.0 && harm.plastic_bottles < 0.0);
}

#[test]
fn working_mode_table_is_monotonic_with_fallback() {
    assert!(FUEL_RATE_TABLE.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(WorkingMode::all().count(), 8);
    assert_eq!(fuel_rate_for_mode(5), 11.0);
    assert_eq!(fuel_rate_for_mode(8), 16.0);
    assert_eq!(fuel_rate_for_mode(0), fuel_rate_for_mode(1));
    assert_eq!(fuel_rate_for_mode(9), fuel_rate_for_mode(1));
    assert!(WorkingMode::new(9).is_none());
}

#[test]
fn schedule_repays_loan_exactly() {
    let inputs = scenario();
    let schedule = amortization_schedule(inputs).expect("schedule");
    assert_eq!(schedule.len(), 48);
    assert_eq!(schedule.last().map(|r| r.remaining_balance), Some(0.0));

    let principal: f64 = schedule.iter().map(|r| r.principal).sum();
    assert!((principal - inputs.loan_amount()).abs() < 1e-6);
    assert!(schedule.windows(2).all(|w| w[1].interest <= w[0].interest));
    assert!((schedule[0].interest - 800.0).abs() < 1e-9);

    let paid: f64 = schedule.iter().map(|r| r.payment).sum();
    assert!((paid - inputs.loan_amount() - total_interest(&schedule)).abs() < 1e-6);
}

#[test]
fn zero_interest_schedule_is_flat() {
    let inputs = CostInputs {
        interest_rate: 0.0,
        ..scenario()
    };
    let schedule = amortization_schedule(inputs).expect("schedule");
    assert_eq!(total_interest(&schedule), 0.0);
    assert!(schedule
        .iter()
        .all(|r| (r.principal - 80_000.0 / 48.0).abs() < 1e-6));
}
