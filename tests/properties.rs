//! 비용 모델의 불변식을 임의 입력으로 검사한다.
use excavator_cost_toolbox::cost::{
    compute_cost_breakdown, environmental_equivalence, validate, CostInputs,
};
use proptest::prelude::*;

fn valid_inputs() -> impl Strategy<Value = CostInputs> {
    (
        1_000.0..1_000_000.0f64,
        0.1..20.0f64,
        12u32..=84,
        10.0..50.0f64,
        0.5..24.0f64,
        1.0..40.0f64,
    )
        .prop_map(|(price, rate, months, down, hours, fuel)| CostInputs {
            price,
            interest_rate: rate,
            loan_length_months: months,
            downpayment_percent: down,
            daily_operating_hours: hours,
            fuel_rate_liters_per_hour: fuel,
        })
}

proptest! {
    /// Property: 유효 범위 입력은 검증 항목이 없다.
    #[test]
    fn valid_range_has_no_issues(inputs in valid_inputs()) {
        prop_assert!(validate(inputs).is_empty());
    }

    /// Property: 원금 + 이자 = 월 할부금.
    #[test]
    fn interest_plus_principal_is_payment(inputs in valid_inputs()) {
        let b = compute_cost_breakdown(inputs).unwrap();
        let tolerance = 1e-9 * b.monthly_payment.abs().max(1.0);
        let split = b.interest_payment + b.principal_payment;
        prop_assert!((split - b.monthly_payment).abs() < tolerance);
    }

    /// Property: 총비용은 다섯 항목의 합이고 연간 연료비는 월 연료비의 12배다.
    #[test]
    fn totals_have_no_hidden_terms(inputs in valid_inputs()) {
        let b = compute_cost_breakdown(inputs).unwrap();
        let sum: f64 = b.components().iter().sum();
        prop_assert_eq!(b.total_monthly_cost, sum);
        prop_assert_eq!(b.annual_fuel_cost, b.monthly_fuel_cost * 12.0);
    }

    /// Property: 연료 소모량이 늘면 연료비와 총비용이 늘어난다.
    #[test]
    fn more_fuel_costs_more(inputs in valid_inputs(), extra in 0.5..10.0f64) {
        let base = compute_cost_breakdown(inputs).unwrap();
        let thirsty = compute_cost_breakdown(
            inputs.with_fuel_rate(inputs.fuel_rate_liters_per_hour + extra),
        ).unwrap();
        prop_assert!(thirsty.monthly_fuel_cost > base.monthly_fuel_cost);
        prop_assert!(thirsty.total_monthly_cost > base.total_monthly_cost);
    }

    /// Property: 선수금이 늘면 대출 원금과 월 할부금이 줄어든다.
    #[test]
    fn larger_downpayment_lowers_payment(inputs in valid_inputs(), extra in 1.0..10.0f64) {
        let more_down = CostInputs {
            downpayment_percent: (inputs.downpayment_percent + extra).min(50.0),
            ..inputs
        };
        prop_assume!(more_down.downpayment_percent > inputs.downpayment_percent);
        let base = compute_cost_breakdown(inputs).unwrap();
        let lighter = compute_cost_breakdown(more_down).unwrap();
        prop_assert!(lighter.loan_amount < base.loan_amount);
        prop_assert!(lighter.monthly_payment < base.monthly_payment);
    }

    /// Property: 무이자면 할부금이 원금 분할액과 같다.
    #[test]
    fn zero_interest_never_divides_by_zero(inputs in valid_inputs()) {
        let b = compute_cost_breakdown(CostInputs { interest_rate: 0.0, ..inputs }).unwrap();
        prop_assert_eq!(b.monthly_payment, b.principal_payment);
        prop_assert_eq!(b.interest_payment, 0.0);
    }

    /// Property: 환경 환산은 선형이다.
    #[test]
    fn environmental_equivalence_is_linear(liters in -50_000.0..50_000.0f64) {
        let one = environmental_equivalence(liters);
        let two = environmental_equivalence(liters * 2.0);
        let tol = 1e-9 * one.plastic_bottles.abs().max(1.0);
        prop_assert!((two.co2_kg - 2.0 * one.co2_kg).abs() < tol);
        prop_assert!((two.tree_years - 2.0 * one.tree_years).abs() < tol);
        prop_assert!((two.plastic_bottles - 2.0 * one.plastic_bottles).abs() < tol);
    }
}
