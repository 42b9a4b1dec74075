use super::breakdown::{ensure_computable, loan_payment, CostError};
use super::inputs::CostInputs;

/// 상환 스케줄의 한 달치 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    /// 1부터 시작하는 회차
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    /// 이번 회차 상환 후 잔액
    pub remaining_balance: f64,
}

/// 원리금 균등 상환 스케줄을 회차별로 계산한다.
///
/// 이자는 직전 잔액 기준이며 마지막 회차에서 잔액을 정확히 0으로 정산한다.
pub fn amortization_schedule(inputs: CostInputs) -> Result<Vec<AmortizationRow>, CostError> {
    ensure_computable(inputs)?;

    let months = inputs.loan_length_months;
    let rate = inputs.monthly_rate();
    let loan = loan_payment(inputs.loan_amount(), rate, months)?;

    let mut balance = inputs.loan_amount();
    let mut rows = Vec::with_capacity(months as usize);
    for month in 1..=months {
        let interest = balance * rate;
        let (principal, payment) = if month == months {
            (balance, balance + interest)
        } else {
            (loan.monthly_payment - interest, loan.monthly_payment)
        };
        balance = if month == months { 0.0 } else { balance - principal };
        rows.push(AmortizationRow {
            month,
            payment,
            principal,
            interest,
            remaining_balance: balance,
        });
    }
    Ok(rows)
}

/// 스케줄 전체의 이자 합계.
pub fn total_interest(schedule: &[AmortizationRow]) -> f64 {
    schedule.iter().map(|row| row.interest).sum()
}
