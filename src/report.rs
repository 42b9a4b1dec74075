//! 계산 결과를 현재 언어의 텍스트 줄로 바꾼다. CLI 출력은 모두 여기를 거친다.

use crate::cost::{
    total_interest, AmortizationRow, ComparisonResult, CostBreakdown, CostError, CostFlow,
    EnvironmentalEquivalence, FlowNode, RoiHorizon, ValidationIssue, WorkingMode,
};
use crate::i18n::{keys, Translator};

/// `$1,234.56` 형식. 음수는 `-$1,234.56`.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}${grouped}.{frac_part}")
}

fn row(tr: &Translator, key: &str, value: f64) -> String {
    format!("{}: {}", tr.t(key), format_currency(value))
}

pub fn flow_node_label<'a>(tr: &'a Translator, node: FlowNode) -> &'a str {
    let key = match node {
        FlowNode::TotalMonthlyCost => keys::FLOW_TOTAL,
        FlowNode::LoanPayment => keys::FLOW_LOAN,
        FlowNode::PrincipalPayment => keys::FLOW_PRINCIPAL,
        FlowNode::InterestPayment => keys::FLOW_INTEREST,
        FlowNode::OperatorSalary => keys::FLOW_OPERATOR,
        FlowNode::MachineInsurance => keys::FLOW_INSURANCE,
        FlowNode::FuelCost => keys::FLOW_FUEL,
        FlowNode::WarrantyService => keys::FLOW_WARRANTY,
    };
    tr.t(key)
}

pub fn breakdown_lines(tr: &Translator, b: &CostBreakdown) -> Vec<String> {
    vec![
        row(tr, keys::RESULT_TOTAL_MONTHLY, b.total_monthly_cost),
        row(tr, keys::RESULT_LOAN_AMOUNT, b.loan_amount),
        row(tr, keys::RESULT_MONTHLY_PAYMENT, b.monthly_payment),
        row(tr, keys::RESULT_PRINCIPAL, b.principal_payment),
        row(tr, keys::RESULT_INTEREST, b.interest_payment),
        row(tr, keys::RESULT_OPERATOR, b.operator_salary),
        row(tr, keys::RESULT_INSURANCE, b.machine_insurance),
        row(tr, keys::RESULT_FUEL, b.monthly_fuel_cost),
        row(tr, keys::RESULT_ANNUAL_FUEL, b.annual_fuel_cost),
        row(tr, keys::RESULT_WARRANTY, b.warranty_service_monthly),
    ]
}

pub fn flow_lines(tr: &Translator, flow: &CostFlow) -> Vec<String> {
    flow.links()
        .iter()
        .map(|link| {
            format!(
                "{} -> {}: {}",
                flow_node_label(tr, link.source),
                flow_node_label(tr, link.target),
                format_currency(link.value)
            )
        })
        .collect()
}

pub fn roi_text(tr: &Translator, roi: RoiHorizon) -> String {
    match roi {
        RoiHorizon::Years(years) => {
            tr.fill(keys::COMPARE_ROI_YEARS, &[("years", format!("{years:.1}"))])
        }
        RoiHorizon::Undefined => tr.t(keys::COMPARE_ROI_UNDEFINED).to_string(),
    }
}

pub fn comparison_lines(tr: &Translator, c: &ComparisonResult) -> Vec<String> {
    vec![
        format!(
            "{}: {} / {}: {}",
            tr.t(keys::COMPARE_SUBJECT),
            format_currency(c.subject.total_monthly_cost),
            tr.t(keys::COMPARE_COMPETITOR),
            format_currency(c.competitor.total_monthly_cost)
        ),
        row(tr, keys::COMPARE_MONTHLY_FUEL_SAVINGS, c.monthly_fuel_savings),
        row(tr, keys::COMPARE_ANNUAL_FUEL_SAVINGS, c.annual_fuel_savings),
        row(tr, keys::COMPARE_TOTAL_MONTHLY_SAVINGS, c.total_monthly_savings),
        row(tr, keys::COMPARE_ANNUAL_TOTAL_SAVINGS, c.annual_total_savings),
        format!("{}: {}", tr.t(keys::COMPARE_ROI), roi_text(tr, c.roi)),
    ]
}

pub fn environment_lines(tr: &Translator, env: &EnvironmentalEquivalence) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {:.1} kg", tr.t(keys::ENV_CO2), env.co2_kg),
        format!("{}: {:.1}", tr.t(keys::ENV_TREES), env.tree_years),
        format!("{}: {:.0}", tr.t(keys::ENV_BOTTLES), env.plastic_bottles),
    ];
    if env.co2_kg < 0.0 {
        lines.push(tr.t(keys::ENV_NET_HARM).to_string());
    }
    lines
}

pub fn validation_message(tr: &Translator, issue: &ValidationIssue) -> String {
    use ValidationIssue::*;

    let (key, value) = match *issue {
        PriceNotPositive(v) => (keys::VALIDATION_PRICE_NOT_POSITIVE, v.to_string()),
        InterestRateNegative(v) => (keys::VALIDATION_INTEREST_NEGATIVE, v.to_string()),
        InterestRateZero => (keys::VALIDATION_INTEREST_ZERO, String::new()),
        InterestRateHigh(v) => (keys::VALIDATION_INTEREST_HIGH, v.to_string()),
        LoanTooShort(m) => (keys::VALIDATION_LOAN_TOO_SHORT, m.to_string()),
        LoanTooLong(m) => (keys::VALIDATION_LOAN_TOO_LONG, m.to_string()),
        DownpaymentBelowMinimum(v) => (keys::VALIDATION_DOWNPAYMENT_LOW, v.to_string()),
        DownpaymentAboveMaximum(v) => (keys::VALIDATION_DOWNPAYMENT_HIGH, v.to_string()),
        HoursNotPositive(v) => (keys::VALIDATION_HOURS_NOT_POSITIVE, v.to_string()),
        HoursExceedDay(v) => (keys::VALIDATION_HOURS_EXCEED_DAY, v.to_string()),
        FuelRateNotPositive(v) => (keys::VALIDATION_FUEL_NOT_POSITIVE, v.to_string()),
    };
    tr.fill(key, &[("value", value)])
}

/// 경고/오류 접두어를 붙인 검증 메시지 목록.
pub fn validation_lines(tr: &Translator, issues: &[ValidationIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|issue| {
            let prefix = if issue.is_blocking() {
                tr.t(keys::ERROR_PREFIX)
            } else {
                tr.t(keys::WARNING_PREFIX)
            };
            format!("[{prefix}] {}", validation_message(tr, issue))
        })
        .collect()
}

pub fn error_lines(tr: &Translator, err: &CostError) -> Vec<String> {
    match err {
        CostError::Validation(issues) => {
            let mut lines = vec![tr.t(keys::VALIDATION_HEADING).to_string()];
            lines.extend(validation_lines(tr, issues));
            lines
        }
        CostError::ZeroLoanLength => vec![format!(
            "[{}] {}",
            tr.t(keys::ERROR_PREFIX),
            tr.t(keys::ERROR_ZERO_LOAN)
        )],
        CostError::NonFinite { quantity } => vec![format!(
            "[{}] {}",
            tr.t(keys::ERROR_PREFIX),
            tr.fill(keys::ERROR_NON_FINITE, &[("quantity", quantity.to_string())])
        )],
    }
}

pub fn modes_lines(tr: &Translator) -> Vec<String> {
    WorkingMode::all()
        .map(|mode| {
            tr.fill(
                keys::MODES_ROW,
                &[
                    ("mode", mode.number().to_string()),
                    ("rate", format!("{:.1}", mode.fuel_rate())),
                ],
            )
        })
        .collect()
}

pub fn schedule_lines(tr: &Translator, schedule: &[AmortizationRow]) -> Vec<String> {
    let mut lines = vec![tr.t(keys::SCHEDULE_HEADER).to_string()];
    lines.extend(schedule.iter().map(|r| {
        format!(
            "{:>3} | {} | {} | {} | {}",
            r.month,
            format_currency(r.payment),
            format_currency(r.principal),
            format_currency(r.interest),
            format_currency(r.remaining_balance)
        )
    }));
    lines.push(row(tr, keys::SCHEDULE_TOTAL_INTEREST, total_interest(schedule)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(5610.179), "$5,610.18");
        assert_eq!(format_currency(999.0), "$999.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1200.0), "-$1,200.00");
    }
}
