use thiserror::Error;
use tracing::debug;

use super::inputs::{CostAssumptions, CostInputs};
use super::validation::{has_blocking, validate, ValidationIssue};

/// 비용 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    /// 계산을 막는 입력 범위 위반 (전체 목록)
    #[error("입력값 오류: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),
    /// 대출 기간이 0이라 할부금을 나눌 수 없음
    #[error("대출 기간이 0개월이라 월 상환액을 계산할 수 없습니다")]
    ZeroLoanLength,
    /// 산술 결과가 NaN/무한대
    #[error("계산 결과가 유한하지 않습니다: {quantity}")]
    NonFinite { quantity: &'static str },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 월 상환액과 원금/이자 구성.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanPayment {
    pub monthly_payment: f64,
    /// 원금 균등 분할액 (대출 원금 / 기간)
    pub principal_payment: f64,
    /// 월 상환액 - 원금 분할액
    pub interest_payment: f64,
}

/// 한 장비의 월 보유 비용 명세.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub loan_amount: f64,
    pub monthly_payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    pub operator_salary: f64,
    pub machine_insurance: f64,
    pub monthly_fuel_cost: f64,
    pub annual_fuel_cost: f64,
    pub warranty_service_monthly: f64,
    pub total_monthly_cost: f64,
}

impl CostBreakdown {
    /// 월 총비용을 구성하는 다섯 항목. 합계가 `total_monthly_cost`와 같다.
    pub fn components(&self) -> [f64; 5] {
        [
            self.monthly_payment,
            self.operator_salary,
            self.machine_insurance,
            self.monthly_fuel_cost,
            self.warranty_service_monthly,
        ]
    }
}

fn ensure_finite(quantity: &'static str, value: f64) -> Result<f64, CostError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CostError::NonFinite { quantity })
    }
}

/// 검증 목록에서 계산을 막는 항목만 골라 오류로 만든다.
pub(crate) fn ensure_computable(inputs: CostInputs) -> Result<(), CostError> {
    let issues = validate(inputs);
    if !has_blocking(&issues) {
        return Ok(());
    }
    let blocking: Vec<ValidationIssue> = issues
        .into_iter()
        .filter(ValidationIssue::is_blocking)
        .collect();
    debug!(count = blocking.len(), "blocking validation issues");
    Err(CostError::Validation(blocking))
}

/// 원리금 균등 상환식으로 월 상환액을 구한다.
///
/// 월 이자율이 0이면 상환식의 분모가 0이 되므로 원금만 균등 분할한다.
/// 분모 `1 - (1 + r)^-n`은 `ln_1p`/`exp_m1`로 계산한다.
/// 아주 작은 이자율에서도 자릿수를 잃지 않는다.
pub fn loan_payment(
    loan_amount: f64,
    monthly_rate: f64,
    months: u32,
) -> Result<LoanPayment, CostError> {
    if months == 0 {
        return Err(CostError::ZeroLoanLength);
    }
    let n = f64::from(months);
    let principal_payment = loan_amount / n;
    let monthly_payment = if monthly_rate == 0.0 {
        principal_payment
    } else {
        let discount = -(-n * monthly_rate.ln_1p()).exp_m1();
        loan_amount * monthly_rate / discount
    };
    // 이자율이 양수면 상환액은 원금 분할액 이상이다. 반올림 오차로 이자가 음수가 되지 않게 한다.
    let monthly_payment =
        ensure_finite("monthly_payment", monthly_payment)?.max(principal_payment);
    Ok(LoanPayment {
        monthly_payment,
        principal_payment,
        interest_payment: monthly_payment - principal_payment,
    })
}

/// 기본 고정비 가정으로 월 보유 비용을 계산한다.
pub fn compute_cost_breakdown(inputs: CostInputs) -> Result<CostBreakdown, CostError> {
    compute_cost_breakdown_with(inputs, &CostAssumptions::default())
}

/// 주어진 고정비 가정으로 월 보유 비용을 계산한다.
pub fn compute_cost_breakdown_with(
    inputs: CostInputs,
    assumptions: &CostAssumptions,
) -> Result<CostBreakdown, CostError> {
    ensure_computable(inputs)?;

    let loan_amount = inputs.loan_amount();
    let loan = loan_payment(loan_amount, inputs.monthly_rate(), inputs.loan_length_months)?;

    let fuel_liters = assumptions
        .monthly_fuel_liters(inputs.daily_operating_hours, inputs.fuel_rate_liters_per_hour);
    let monthly_fuel_cost = ensure_finite(
        "monthly_fuel_cost",
        fuel_liters * assumptions.fuel_price_per_liter,
    )?;
    let warranty_service_monthly = ensure_finite(
        "warranty_service_monthly",
        assumptions.warranty_service_monthly(),
    )?;

    let total_monthly_cost = ensure_finite(
        "total_monthly_cost",
        loan.monthly_payment
            + assumptions.operator_salary
            + assumptions.machine_insurance
            + monthly_fuel_cost
            + warranty_service_monthly,
    )?;

    debug!(
        loan_amount,
        monthly_payment = loan.monthly_payment,
        monthly_fuel_cost,
        total_monthly_cost,
        "cost breakdown computed"
    );

    Ok(CostBreakdown {
        loan_amount,
        monthly_payment: loan.monthly_payment,
        principal_payment: loan.principal_payment,
        interest_payment: loan.interest_payment,
        operator_salary: assumptions.operator_salary,
        machine_insurance: assumptions.machine_insurance,
        monthly_fuel_cost,
        annual_fuel_cost: monthly_fuel_cost * 12.0,
        warranty_service_monthly,
        total_monthly_cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_months_is_an_error_not_a_panic() {
        assert_eq!(loan_payment(1000.0, 0.01, 0), Err(CostError::ZeroLoanLength));
    }

    #[test]
    fn zero_rate_pays_principal_only() {
        let p = loan_payment(1200.0, 0.0, 12).expect("payment");
        assert_eq!(p.monthly_payment, 100.0);
        assert_eq!(p.interest_payment, 0.0);
    }

    #[test]
    fn zero_warranty_months_is_reported() {
        let assumptions = CostAssumptions {
            warranty_service_months: 0,
            ..CostAssumptions::default()
        };
        let err = compute_cost_breakdown_with(CostInputs::default(), &assumptions).unwrap_err();
        assert_eq!(
            err,
            CostError::NonFinite {
                quantity: "warranty_service_monthly"
            }
        );
    }
}
