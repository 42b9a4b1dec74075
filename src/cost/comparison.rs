use tracing::debug;

use super::breakdown::{compute_cost_breakdown_with, CostBreakdown, CostError};
use super::environment::{environmental_equivalence, EnvironmentalEquivalence};
use super::inputs::{CostAssumptions, CostInputs};

/// 구매가를 연료 절감액으로 회수하는 데 걸리는 기간.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoiHorizon {
    /// 회수 기간 [년]
    Years(f64),
    /// 절감액이 0 이하라 회수할 수 없음
    Undefined,
}

impl RoiHorizon {
    pub fn years(&self) -> Option<f64> {
        match self {
            RoiHorizon::Years(y) => Some(*y),
            RoiHorizon::Undefined => None,
        }
    }
}

/// 대상 장비와 경쟁 장비의 비용 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonResult {
    pub subject: CostBreakdown,
    pub competitor: CostBreakdown,
    /// 월 연료비 절감액 (경쟁 - 대상)
    pub monthly_fuel_savings: f64,
    pub annual_fuel_savings: f64,
    /// 연간 연료 절감량 [L]
    pub annual_fuel_savings_liters: f64,
    pub total_monthly_savings: f64,
    pub annual_total_savings: f64,
    pub roi: RoiHorizon,
}

impl ComparisonResult {
    /// 연간 연료 절감량을 환경 지표로 환산한다.
    pub fn environmental_equivalence(&self) -> EnvironmentalEquivalence {
        environmental_equivalence(self.annual_fuel_savings_liters)
    }
}

/// 기본 고정비 가정으로 두 장비를 비교한다.
pub fn compare_machines(
    inputs: CostInputs,
    subject_fuel_rate: f64,
    competitor_fuel_rate: f64,
) -> Result<ComparisonResult, CostError> {
    compare_machines_with(
        inputs,
        subject_fuel_rate,
        competitor_fuel_rate,
        &CostAssumptions::default(),
    )
}

/// 연료 소모량만 다르고 나머지 입력은 같은 두 장비를 비교한다.
pub fn compare_machines_with(
    inputs: CostInputs,
    subject_fuel_rate: f64,
    competitor_fuel_rate: f64,
    assumptions: &CostAssumptions,
) -> Result<ComparisonResult, CostError> {
    let subject =
        compute_cost_breakdown_with(inputs.with_fuel_rate(subject_fuel_rate), assumptions)?;
    let competitor =
        compute_cost_breakdown_with(inputs.with_fuel_rate(competitor_fuel_rate), assumptions)?;

    let monthly_fuel_savings = competitor.monthly_fuel_cost - subject.monthly_fuel_cost;
    let annual_fuel_savings = monthly_fuel_savings * 12.0;
    let total_monthly_savings = competitor.total_monthly_cost - subject.total_monthly_cost;
    let annual_fuel_savings_liters = (assumptions
        .monthly_fuel_liters(inputs.daily_operating_hours, competitor_fuel_rate)
        - assumptions.monthly_fuel_liters(inputs.daily_operating_hours, subject_fuel_rate))
        * 12.0;

    let roi = if annual_fuel_savings > 0.0 {
        RoiHorizon::Years(inputs.price / annual_fuel_savings)
    } else {
        RoiHorizon::Undefined
    };

    debug!(
        monthly_fuel_savings,
        annual_fuel_savings,
        roi_years = roi.years(),
        "machines compared"
    );

    Ok(ComparisonResult {
        subject,
        competitor,
        monthly_fuel_savings,
        annual_fuel_savings,
        annual_fuel_savings_liters,
        total_monthly_savings,
        annual_total_savings: total_monthly_savings * 12.0,
        roi,
    })
}
