use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE};
use crate::cost::{fuel_rate_for_mode, CostInputs};

/// 굴삭기 월 보유 비용 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "excavator_cost_cli", version)]
pub struct Cli {
    /// 언어 (auto/ko/en). 지정하지 않으면 설정 파일, 시스템 로케일 순으로 정한다.
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    pub lang: String,
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,
    /// 생략하면 대화형 메뉴를 실행한다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 월 보유 비용과 지출 흐름을 출력한다.
    Cost {
        #[command(flatten)]
        loan: LoanArgs,
        #[command(flatten)]
        fuel: FuelArgs,
    },
    /// 대상 장비와 경쟁 장비의 연료비 절감, 회수 기간, 환경 효과를 출력한다.
    Compare {
        #[command(flatten)]
        loan: LoanArgs,
        /// 대상 장비 작업 모드 (1~8)
        #[arg(long, conflicts_with = "subject_rate")]
        subject_mode: Option<u8>,
        /// 대상 장비 연료 소모량 [L/h]
        #[arg(long)]
        subject_rate: Option<f64>,
        /// 경쟁 장비 작업 모드 (1~8)
        #[arg(long, conflicts_with = "competitor_rate")]
        competitor_mode: Option<u8>,
        /// 경쟁 장비 연료 소모량 [L/h]
        #[arg(long)]
        competitor_rate: Option<f64>,
    },
    /// 회차별 대출 상환 스케줄을 출력한다.
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,
    },
    /// 작업 모드별 연료 소모량 표를 출력한다.
    Modes,
}

/// 대출/가동 입력. 생략한 값은 설정 파일의 기본값을 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct LoanArgs {
    /// 장비 현금 가격 [USD]
    #[arg(long)]
    pub price: Option<f64>,
    /// 연 이자율 [%]
    #[arg(long)]
    pub interest_rate: Option<f64>,
    /// 대출 기간 [개월]
    #[arg(long)]
    pub loan_months: Option<u32>,
    /// 선수금 [%]
    #[arg(long)]
    pub downpayment: Option<f64>,
    /// 일일 가동 시간 [h]
    #[arg(long)]
    pub hours: Option<f64>,
}

impl LoanArgs {
    pub fn apply(&self, base: CostInputs) -> CostInputs {
        CostInputs {
            price: self.price.unwrap_or(base.price),
            interest_rate: self.interest_rate.unwrap_or(base.interest_rate),
            loan_length_months: self.loan_months.unwrap_or(base.loan_length_months),
            downpayment_percent: self.downpayment.unwrap_or(base.downpayment_percent),
            daily_operating_hours: self.hours.unwrap_or(base.daily_operating_hours),
            fuel_rate_liters_per_hour: base.fuel_rate_liters_per_hour,
        }
    }
}

/// 연료 소모량 직접 입력 또는 작업 모드.
#[derive(Debug, Clone, Default, Args)]
pub struct FuelArgs {
    /// 연료 소모량 [L/h]
    #[arg(long, conflicts_with = "mode")]
    pub fuel_rate: Option<f64>,
    /// 작업 모드 (1~8)
    #[arg(long)]
    pub mode: Option<u8>,
}

impl FuelArgs {
    pub fn resolve(&self, default_rate: f64) -> f64 {
        rate_or_mode(self.fuel_rate, self.mode, default_rate)
    }
}

/// 직접 입력한 소모량 > 모드 표 > 기본값 순으로 고른다.
pub fn rate_or_mode(rate: Option<f64>, mode: Option<u8>, default_rate: f64) -> f64 {
    rate.or_else(|| mode.map(fuel_rate_for_mode)).unwrap_or(default_rate)
}

impl Command {
    /// 설정 기본값 위에 명령줄 입력을 덮어쓴 계산 입력.
    pub fn inputs(&self, config: &Config) -> CostInputs {
        let base = config.inputs;
        match self {
            Command::Cost { loan, fuel } => loan
                .apply(base)
                .with_fuel_rate(fuel.resolve(base.fuel_rate_liters_per_hour)),
            Command::Compare { loan, .. } | Command::Schedule { loan } => loan.apply(base),
            Command::Modes => base,
        }
    }
}
