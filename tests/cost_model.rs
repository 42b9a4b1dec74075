//! 월 보유 비용 계산 회귀 테스트.
use excavator_cost_toolbox::cost::{
    amortization_schedule, compute_cost_breakdown, cost_flow, has_blocking, validate, CostError,
    CostInputs, FlowNode, InputField, Severity, ValidationIssue,
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
fn reference_scenario_breakdown() {
    let inputs = scenario();
    assert!((inputs.loan_amount() - 80_000.0).abs() < 1e-9);
    assert!((inputs.monthly_rate() - 0.01).abs() < 1e-12);

    let b = compute_cost_breakdown(inputs).expect("valid inputs");
    let expected_payment = 80_000.0 * 0.01 / (1.0 - 1.01_f64.powi(-48));
    assert!((b.monthly_payment - expected_payment).abs() < 1e-9);
    assert!((b.monthly_payment - 2106.71).abs() < 0.01, "payment={}", b.monthly_payment);
    assert!((b.principal_payment - 1666.67).abs() < 0.01);
    assert!((b.interest_payment - 440.04).abs() < 0.01);
    assert_eq!(b.monthly_fuel_cost, 2640.0);
    assert_eq!(b.annual_fuel_cost, 2640.0 * 12.0);
    assert!((b.warranty_service_monthly - 263.47).abs() < 0.01);
    assert_eq!(b.operator_salary, 500.0);
    assert_eq!(b.machine_insurance, 100.0);
    assert!((b.total_monthly_cost - 5610.18).abs() < 0.01, "total={}", b.total_monthly_cost);
}

#[test]
fn total_is_sum_of_components() {
    let b = compute_cost_breakdown(scenario()).expect("valid inputs");
    let sum: f64 = b.components().iter().sum();
    assert_eq!(b.total_monthly_cost, sum);
}

#[test]
fn zero_interest_is_principal_only() {
    let inputs = CostInputs {
        interest_rate: 0.0,
        ..scenario()
    };
    let issues = validate(inputs);
    assert_eq!(issues, vec![ValidationIssue::InterestRateZero]);
    assert_eq!(issues[0].severity(), Severity::Warning);

    let b = compute_cost_breakdown(inputs).expect("zero interest computes");
    assert_eq!(b.monthly_payment, b.principal_payment);
    assert_eq!(b.interest_payment, 0.0);
}

#[test]
fn low_downpayment_is_single_blocking_issue() {
    let inputs = CostInputs {
        downpayment_percent: 5.0,
        ..scenario()
    };
    let issues = validate(inputs);
    assert_eq!(issues, vec![ValidationIssue::DownpaymentBelowMinimum(5.0)]);
    assert_eq!(issues[0].field(), InputField::Downpayment);
    assert!(issues[0].is_blocking());

    let err = compute_cost_breakdown(inputs).unwrap_err();
    assert_eq!(err, CostError::Validation(issues));
}

#[test]
fn high_interest_warns_but_computes() {
    let inputs = CostInputs {
        interest_rate: 25.0,
        ..scenario()
    };
    let issues = validate(inputs);
    assert_eq!(issues, vec![ValidationIssue::InterestRateHigh(25.0)]);
    assert!(!issues[0].is_blocking());
    assert!(compute_cost_breakdown(inputs).is_ok());
}

#[test]
fn every_violation_is_reported_in_rule_order() {
    let inputs = CostInputs {
        price: 0.0,
        interest_rate: -1.0,
        loan_length_months: 6,
        downpayment_percent: 60.0,
        daily_operating_hours: 25.0,
        fuel_rate_liters_per_hour: 0.0,
    };
    let fields: Vec<InputField> = validate(inputs).iter().map(|i| i.field()).collect();
    assert_eq!(
        fields,
        vec![
            InputField::Price,
            InputField::InterestRate,
            InputField::LoanLength,
            InputField::Downpayment,
            InputField::DailyOperatingHours,
            InputField::FuelRate,
        ]
    );
    match compute_cost_breakdown(inputs) {
        Err(CostError::Validation(issues)) => assert_eq!(issues.len(), 6),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn flow_root_outflow_matches_total() {
    let b = compute_cost_breakdown(scenario()).expect("valid inputs");
    let flow = cost_flow(&b);
    assert_eq!(flow.links().len(), 7);
    assert!((flow.outflow(FlowNode::TotalMonthlyCost) - b.total_monthly_cost).abs() < 1e-9);
    assert!(
        (flow.outflow(FlowNode::LoanPayment) - flow.inflow(FlowNode::LoanPayment)).abs() < 1e-9
    );

    let (sources, targets, values) = flow.index_arrays();
    assert_eq!(sources, vec![0, 1, 1, 0, 0, 0, 0]);
    assert_eq!(targets, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(values[5], b.monthly_fuel_cost);
    assert_eq!(flow.nodes()[7].label(), "Warranty and Service Package");
}

#[test]
fn tiny_interest_rates_stay_consistent() {
    for rate in [1e-9, 1e-12, 1e-15] {
        let inputs = CostInputs {
            interest_rate: rate,
            ..scenario()
        };
        assert!(validate(inputs).is_empty(), "rate={rate}");

        let b = compute_cost_breakdown(inputs)
            .unwrap_or_else(|e| panic!("rate={rate} should compute: {e:?}"));
        assert!(b.interest_payment >= 0.0, "rate={rate} interest={}", b.interest_payment);
        assert!(b.monthly_payment >= b.principal_payment, "rate={rate}");
        assert!((b.monthly_payment - b.principal_payment).abs() < 1e-3, "rate={rate}");

        let schedule = amortization_schedule(inputs).expect("schedule");
        assert_eq!(schedule.last().map(|r| r.remaining_balance), Some(0.0));
    }
}

#[test]
fn loan_length_lower_bound_is_inclusive() {
    let at_minimum = CostInputs {
        loan_length_months: 12,
        ..scenario()
    };
    assert!(validate(at_minimum).is_empty());

    let below = CostInputs {
        loan_length_months: 11,
        ..scenario()
    };
    assert_eq!(validate(below), vec![ValidationIssue::LoanTooShort(11)]);
}

#[test]
fn zero_daily_hours_is_blocking() {
    let inputs = CostInputs {
        daily_operating_hours: 0.0,
        ..scenario()
    };
    let issues = validate(inputs);
    assert_eq!(issues, vec![ValidationIssue::HoursNotPositive(0.0)]);
    assert!(has_blocking(&issues));
}

#[test]
fn non_finite_values_break_their_own_rule() {
    let cases = [
        (
            CostInputs {
                interest_rate: f64::NAN,
                ..scenario()
            },
            InputField::InterestRate,
        ),
        (
            CostInputs {
                downpayment_percent: f64::NAN,
                ..scenario()
            },
            InputField::Downpayment,
        ),
        (
            CostInputs {
                daily_operating_hours: f64::NEG_INFINITY,
                ..scenario()
            },
            InputField::DailyOperatingHours,
        ),
        (
            CostInputs {
                fuel_rate_liters_per_hour: f64::INFINITY,
                ..scenario()
            },
            InputField::FuelRate,
        ),
    ];
    for (inputs, field) in cases {
        let issues = validate(inputs);
        assert_eq!(issues.len(), 1, "{field:?}: {issues:?}");
        assert_eq!(issues[0].field(), field);
        assert!(issues[0].is_blocking());
        assert!(matches!(
            compute_cost_breakdown(inputs),
            Err(CostError::Validation(_))
        ));
    }
}

#[test]
fn positive_infinity_reports_the_upper_bound() {
    let hours = validate(CostInputs {
        daily_operating_hours: f64::INFINITY,
        ..scenario()
    });
    assert_eq!(hours, vec![ValidationIssue::HoursExceedDay(f64::INFINITY)]);

    let down = validate(CostInputs {
        downpayment_percent: f64::INFINITY,
        ..scenario()
    });
    assert_eq!(down, vec![ValidationIssue::DownpaymentAboveMaximum(f64::INFINITY)]);
}

#[test]
fn warnings_alone_do_not_block() {
    assert!(!has_blocking(&[]));
    assert!(!has_blocking(&[
        ValidationIssue::InterestRateZero,
        ValidationIssue::InterestRateHigh(30.0),
    ]));
    assert!(has_blocking(&[
        ValidationIssue::InterestRateHigh(30.0),
        ValidationIssue::LoanTooLong(90),
    ]));
}
