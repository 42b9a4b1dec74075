use thiserror::Error;

use super::inputs::CostInputs;

/// 이 값을 넘는 이자율은 경고로만 알린다.
pub const INTEREST_RATE_WARNING_PERCENT: f64 = 20.0;
pub const MIN_LOAN_MONTHS: u32 = 12;
pub const MAX_LOAN_MONTHS: u32 = 84;
pub const MIN_DOWNPAYMENT_PERCENT: f64 = 10.0;
pub const MAX_DOWNPAYMENT_PERCENT: f64 = 50.0;
pub const MAX_DAILY_HOURS: f64 = 24.0;

/// 검증 결과의 심각도.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// 계산은 진행하되 사용자에게 알린다.
    Warning,
    /// 계산을 막는다.
    Blocking,
}

/// 검증 대상 입력 항목.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Price,
    InterestRate,
    LoanLength,
    Downpayment,
    DailyOperatingHours,
    FuelRate,
}

/// 입력 범위 위반 항목. 값은 사용자가 입력한 그대로 보관한다.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("장비 가격은 0보다 커야 합니다 (입력: {0})")]
    PriceNotPositive(f64),
    #[error("이자율은 음수일 수 없습니다 (입력: {0}%)")]
    InterestRateNegative(f64),
    #[error("이자율 0%: 원금만 균등 상환하는 무이자 할부로 계산합니다")]
    InterestRateZero,
    #[error("이자율 {0}%는 통상 상한 {max}%를 넘습니다", max = INTEREST_RATE_WARNING_PERCENT)]
    InterestRateHigh(f64),
    #[error("대출 기간은 최소 {min}개월입니다 (입력: {0}개월)", min = MIN_LOAN_MONTHS)]
    LoanTooShort(u32),
    #[error("대출 기간은 최대 {max}개월입니다 (입력: {0}개월)", max = MAX_LOAN_MONTHS)]
    LoanTooLong(u32),
    #[error("선수금은 최소 {min}%입니다 (입력: {0}%)", min = MIN_DOWNPAYMENT_PERCENT)]
    DownpaymentBelowMinimum(f64),
    #[error("선수금은 최대 {max}%입니다 (입력: {0}%)", max = MAX_DOWNPAYMENT_PERCENT)]
    DownpaymentAboveMaximum(f64),
    #[error("일일 가동 시간은 0보다 커야 합니다 (입력: {0}h)")]
    HoursNotPositive(f64),
    #[error("일일 가동 시간은 {max}시간을 넘을 수 없습니다 (입력: {0}h)", max = MAX_DAILY_HOURS)]
    HoursExceedDay(f64),
    #[error("연료 소모량은 0보다 커야 합니다 (입력: {0} L/h)")]
    FuelRateNotPositive(f64),
}

impl ValidationIssue {
    pub fn field(&self) -> InputField {
        match self {
            ValidationIssue::PriceNotPositive(_) => InputField::Price,
            ValidationIssue::InterestRateNegative(_)
            | ValidationIssue::InterestRateZero
            | ValidationIssue::InterestRateHigh(_) => InputField::InterestRate,
            ValidationIssue::LoanTooShort(_) | ValidationIssue::LoanTooLong(_) => {
                InputField::LoanLength
            }
            ValidationIssue::DownpaymentBelowMinimum(_)
            | ValidationIssue::DownpaymentAboveMaximum(_) => InputField::Downpayment,
            ValidationIssue::HoursNotPositive(_) | ValidationIssue::HoursExceedDay(_) => {
                InputField::DailyOperatingHours
            }
            ValidationIssue::FuelRateNotPositive(_) => InputField::FuelRate,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::InterestRateZero | ValidationIssue::InterestRateHigh(_) => {
                Severity::Warning
            }
            _ => Severity::Blocking,
        }
    }

    pub fn is_blocking(&self) -> bool {
        self.severity() == Severity::Blocking
    }
}

/// 입력값을 범위 규칙 순서대로 모두 검사한다. 첫 위반에서 멈추지 않는다.
///
/// 반환 목록이 비어 있거나 경고만 있으면 계산을 진행할 수 있다.
/// NaN/무한대는 해당 항목의 규칙 위반으로 취급한다. 상한이 있는 항목의 +∞는 상한 위반이다.
pub fn validate(inputs: CostInputs) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if !(inputs.price.is_finite() && inputs.price > 0.0) {
        issues.push(ValidationIssue::PriceNotPositive(inputs.price));
    }

    let rate = inputs.interest_rate;
    if !rate.is_finite() || rate < 0.0 {
        issues.push(ValidationIssue::InterestRateNegative(rate));
    } else if rate == 0.0 {
        issues.push(ValidationIssue::InterestRateZero);
    } else if rate > INTEREST_RATE_WARNING_PERCENT {
        issues.push(ValidationIssue::InterestRateHigh(rate));
    }

    let months = inputs.loan_length_months;
    if months < MIN_LOAN_MONTHS {
        issues.push(ValidationIssue::LoanTooShort(months));
    } else if months > MAX_LOAN_MONTHS {
        issues.push(ValidationIssue::LoanTooLong(months));
    }

    let down = inputs.downpayment_percent;
    if down.is_nan() || down < MIN_DOWNPAYMENT_PERCENT {
        issues.push(ValidationIssue::DownpaymentBelowMinimum(down));
    } else if down > MAX_DOWNPAYMENT_PERCENT {
        issues.push(ValidationIssue::DownpaymentAboveMaximum(down));
    }

    let hours = inputs.daily_operating_hours;
    if hours.is_nan() || hours <= 0.0 {
        issues.push(ValidationIssue::HoursNotPositive(hours));
    } else if hours > MAX_DAILY_HOURS {
        issues.push(ValidationIssue::HoursExceedDay(hours));
    }

    let fuel = inputs.fuel_rate_liters_per_hour;
    if !(fuel.is_finite() && fuel > 0.0) {
        issues.push(ValidationIssue::FuelRateNotPositive(fuel));
    }

    issues
}

/// 계산을 막는 항목이 하나라도 있는지 확인한다.
pub fn has_blocking(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(ValidationIssue::is_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_price_is_rejected() {
        let issues = validate(CostInputs {
            price: f64::NAN,
            ..CostInputs::default()
        });
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field(), InputField::Price);
    }

    #[test]
    fn upper_bounds_are_inclusive() {
        let issues = validate(CostInputs {
            loan_length_months: 84,
            downpayment_percent: 50.0,
            daily_operating_hours: 24.0,
            interest_rate: 20.0,
            ..CostInputs::default()
        });
        assert!(issues.is_empty(), "{issues:?}");
    }
}
