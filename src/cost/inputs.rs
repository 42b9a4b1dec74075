use serde::{Deserialize, Serialize};

/// 월 운전원 인건비 [통화/월]
pub const OPERATOR_SALARY: f64 = 500.0;
/// 월 장비 보험료 [통화/월]
pub const MACHINE_INSURANCE: f64 = 100.0;
/// 보증·정비 패키지 총액 [통화]
pub const WARRANTY_SERVICE_TOTAL: f64 = 9485.0;
/// 보증·정비 패키지 유효 기간 [개월] (3년)
pub const WARRANTY_SERVICE_MONTHS: u32 = 36;
/// 연료 단가 [통화/L]
pub const FUEL_PRICE_PER_LITER: f64 = 1.0;
/// 월 가동 일수
pub const DAYS_PER_MONTH: f64 = 30.0;

/// 월 보유 비용 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostInputs {
    /// 장비 현금 가격 [통화]
    pub price: f64,
    /// 연 명목 이자율 [%]
    pub interest_rate: f64,
    /// 대출 기간 [개월]
    pub loan_length_months: u32,
    /// 선수금 비율 [%]
    pub downpayment_percent: f64,
    /// 일일 가동 시간 [h]
    pub daily_operating_hours: f64,
    /// 시간당 연료 소모량 [L/h]
    pub fuel_rate_liters_per_hour: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            price: 50_000.0,
            interest_rate: 5.0,
            loan_length_months: 48,
            downpayment_percent: 20.0,
            daily_operating_hours: 8.0,
            fuel_rate_liters_per_hour: 14.0,
        }
    }
}

impl CostInputs {
    /// 선수금을 제외한 대출 원금.
    pub fn loan_amount(&self) -> f64 {
        self.price * (1.0 - self.downpayment_percent / 100.0)
    }

    /// 연 이자율(%)을 월 이자율(소수)로 환산한다.
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 12.0 / 100.0
    }

    /// 연료 소모량만 바꾼 사본을 만든다. 장비 비교 시 나머지 입력은 공유한다.
    pub fn with_fuel_rate(self, fuel_rate_liters_per_hour: f64) -> Self {
        Self {
            fuel_rate_liters_per_hour,
            ..self
        }
    }
}

/// 고정 비용 가정값. 기본값은 표준 견적 조건이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostAssumptions {
    pub operator_salary: f64,
    pub machine_insurance: f64,
    pub warranty_service_total: f64,
    pub warranty_service_months: u32,
    pub fuel_price_per_liter: f64,
    pub days_per_month: f64,
}

impl Default for CostAssumptions {
    fn default() -> Self {
        Self {
            operator_salary: OPERATOR_SALARY,
            machine_insurance: MACHINE_INSURANCE,
            warranty_service_total: WARRANTY_SERVICE_TOTAL,
            warranty_service_months: WARRANTY_SERVICE_MONTHS,
            fuel_price_per_liter: FUEL_PRICE_PER_LITER,
            days_per_month: DAYS_PER_MONTH,
        }
    }
}

impl CostAssumptions {
    /// 보증·정비 패키지의 월 분할액.
    pub fn warranty_service_monthly(&self) -> f64 {
        self.warranty_service_total / f64::from(self.warranty_service_months)
    }

    /// 월 연료 사용량 [L].
    pub fn monthly_fuel_liters(&self, daily_hours: f64, fuel_rate_liters_per_hour: f64) -> f64 {
        daily_hours * fuel_rate_liters_per_hour * self.days_per_month
    }
}
