use std::fmt::Display;
use std::io::{self, Write};
use std::str::FromStr;

use crate::app::AppError;
use crate::config::Config;
use crate::cost::{
    amortization_schedule, compare_machines_with, compute_cost_breakdown_with, cost_flow,
    fuel_rate_for_mode, validate, CostAssumptions, CostError, CostInputs,
};
use crate::i18n::keys::*;
use crate::i18n::Translator;
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Cost,
    Compare,
    Modes,
    Schedule,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        MAIN_MENU_TITLE,
        MAIN_MENU_COST,
        MAIN_MENU_COMPARE,
        MAIN_MENU_MODES,
        MAIN_MENU_SCHEDULE,
        MAIN_MENU_SETTINGS,
        MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Cost),
            "2" => return Ok(MenuChoice::Compare),
            "3" => return Ok(MenuChoice::Modes),
            "4" => return Ok(MenuChoice::Schedule),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(INVALID_SELECTION_RETRY)),
        }
    }
}

/// 월 비용 메뉴를 처리한다.
pub fn handle_cost(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let inputs = read_inputs(tr, cfg.inputs)?;
    let mode = read_or(tr, PROMPT_WORKING_MODE, cfg.subject_mode)?;
    let inputs = inputs.with_fuel_rate(fuel_rate_for_mode(mode));
    if let Err(err) = show_cost(tr, inputs, &cfg.assumptions) {
        print_lines(&report::error_lines(tr, &err));
    }
    Ok(())
}

/// 장비 비교 메뉴를 처리한다.
pub fn handle_compare(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let inputs = read_inputs(tr, cfg.inputs)?;
    let subject = read_or(tr, PROMPT_SUBJECT_MODE, cfg.subject_mode)?;
    let competitor = read_or(tr, PROMPT_COMPETITOR_MODE, cfg.competitor_mode)?;
    let result = show_comparison(
        tr,
        inputs,
        fuel_rate_for_mode(subject),
        fuel_rate_for_mode(competitor),
        &cfg.assumptions,
    );
    if let Err(err) = result {
        print_lines(&report::error_lines(tr, &err));
    }
    Ok(())
}

/// 상환 스케줄 메뉴를 처리한다.
pub fn handle_schedule(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    let inputs = read_inputs(tr, cfg.inputs)?;
    if let Err(err) = show_schedule(tr, inputs) {
        print_lines(&report::error_lines(tr, &err));
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(SETTINGS_HEADING));
    println!("{}: {}", tr.t(SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(SETTINGS_OPTIONS));
    let sel = read_line(tr.t(SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => {
            println!("{}", tr.t(SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(PROMPT_SELECT))?;
            match lang.trim() {
                "1" => cfg.language = "auto".into(),
                "2" => cfg.language = "ko".into(),
                "3" => cfg.language = "en".into(),
                _ => println!("{}", tr.t(SETTINGS_INVALID)),
            }
        }
        "2" => cfg.subject_mode = read_or(tr, PROMPT_SUBJECT_MODE, cfg.subject_mode)?,
        "3" => cfg.competitor_mode = read_or(tr, PROMPT_COMPETITOR_MODE, cfg.competitor_mode)?,
        "4" => cfg.inputs = read_inputs(tr, cfg.inputs)?,
        _ => println!("{}", tr.t(SETTINGS_INVALID)),
    }
    Ok(())
}

/// 경고를 먼저 보여주고 월 비용과 지출 흐름을 출력한다.
pub fn show_cost(
    tr: &Translator,
    inputs: CostInputs,
    assumptions: &CostAssumptions,
) -> Result<(), CostError> {
    print_warnings(tr, inputs);
    let breakdown = compute_cost_breakdown_with(inputs, assumptions)?;
    println!("{}", tr.t(COST_HEADING));
    print_lines(&report::breakdown_lines(tr, &breakdown));
    println!("{}", tr.t(FLOW_HEADING));
    print_lines(&report::flow_lines(tr, &cost_flow(&breakdown)));
    Ok(())
}

pub fn show_comparison(
    tr: &Translator,
    inputs: CostInputs,
    subject_fuel_rate: f64,
    competitor_fuel_rate: f64,
    assumptions: &CostAssumptions,
) -> Result<(), CostError> {
    print_warnings(tr, inputs);
    let comparison =
        compare_machines_with(inputs, subject_fuel_rate, competitor_fuel_rate, assumptions)?;
    println!("{}", tr.t(COMPARE_HEADING));
    print_lines(&report::comparison_lines(tr, &comparison));
    println!("{}", tr.t(ENV_HEADING));
    print_lines(&report::environment_lines(
        tr,
        &comparison.environmental_equivalence(),
    ));
    Ok(())
}

pub fn show_schedule(tr: &Translator, inputs: CostInputs) -> Result<(), CostError> {
    print_warnings(tr, inputs);
    let schedule = amortization_schedule(inputs)?;
    println!("{}", tr.t(SCHEDULE_HEADING));
    print_lines(&report::schedule_lines(tr, &schedule));
    Ok(())
}

pub fn show_modes(tr: &Translator) {
    println!("{}", tr.t(MODES_HEADING));
    print_lines(&report::modes_lines(tr));
}

/// 계산을 막지 않는 경고만 출력한다. 막는 항목은 계산 오류로 보고된다.
fn print_warnings(tr: &Translator, inputs: CostInputs) {
    let warnings: Vec<_> = validate(inputs)
        .into_iter()
        .filter(|issue| !issue.is_blocking())
        .collect();
    print_lines(&report::validation_lines(tr, &warnings));
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn read_inputs(tr: &Translator, defaults: CostInputs) -> Result<CostInputs, AppError> {
    Ok(CostInputs {
        price: read_or(tr, PROMPT_PRICE, defaults.price)?,
        interest_rate: read_or(tr, PROMPT_INTEREST_RATE, defaults.interest_rate)?,
        loan_length_months: read_or(tr, PROMPT_LOAN_LENGTH, defaults.loan_length_months)?,
        downpayment_percent: read_or(tr, PROMPT_DOWNPAYMENT, defaults.downpayment_percent)?,
        daily_operating_hours: read_or(tr, PROMPT_DAILY_HOURS, defaults.daily_operating_hours)?,
        fuel_rate_liters_per_hour: defaults.fuel_rate_liters_per_hour,
    })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(buf)
}

/// 값을 읽는다. 빈 입력이면 기본값을 쓴다.
fn read_or<T>(tr: &Translator, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr + Display + Copy,
{
    let hint = tr.fill(PROMPT_DEFAULT_HINT, &[("default", default.to_string())]);
    loop {
        let s = read_line(&format!("{} {hint}: ", tr.t(key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(INVALID_NUMBER)),
        }
    }
}
