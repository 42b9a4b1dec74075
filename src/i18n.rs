use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COST: &str = "main_menu.cost";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_MODES: &str = "main_menu.modes";
    pub const MAIN_MENU_SCHEDULE: &str = "main_menu.schedule";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_DEFAULT_HINT: &str = "prompt.default_hint";
    pub const PROMPT_PRICE: &str = "prompt.price";
    pub const PROMPT_INTEREST_RATE: &str = "prompt.interest_rate";
    pub const PROMPT_LOAN_LENGTH: &str = "prompt.loan_length";
    pub const PROMPT_DOWNPAYMENT: &str = "prompt.downpayment";
    pub const PROMPT_DAILY_HOURS: &str = "prompt.daily_hours";
    pub const PROMPT_WORKING_MODE: &str = "prompt.working_mode";
    pub const PROMPT_SUBJECT_MODE: &str = "prompt.subject_mode";
    pub const PROMPT_COMPETITOR_MODE: &str = "prompt.competitor_mode";

    pub const COST_HEADING: &str = "cost.heading";
    pub const RESULT_TOTAL_MONTHLY: &str = "result.total_monthly";
    pub const RESULT_LOAN_AMOUNT: &str = "result.loan_amount";
    pub const RESULT_MONTHLY_PAYMENT: &str = "result.monthly_payment";
    pub const RESULT_PRINCIPAL: &str = "result.principal";
    pub const RESULT_INTEREST: &str = "result.interest";
    pub const RESULT_OPERATOR: &str = "result.operator";
    pub const RESULT_INSURANCE: &str = "result.insurance";
    pub const RESULT_FUEL: &str = "result.fuel";
    pub const RESULT_ANNUAL_FUEL: &str = "result.annual_fuel";
    pub const RESULT_WARRANTY: &str = "result.warranty";

    pub const FLOW_HEADING: &str = "flow.heading";
    pub const FLOW_TOTAL: &str = "flow.total";
    pub const FLOW_LOAN: &str = "flow.loan";
    pub const FLOW_PRINCIPAL: &str = "flow.principal";
    pub const FLOW_INTEREST: &str = "flow.interest";
    pub const FLOW_OPERATOR: &str = "flow.operator";
    pub const FLOW_INSURANCE: &str = "flow.insurance";
    pub const FLOW_FUEL: &str = "flow.fuel";
    pub const FLOW_WARRANTY: &str = "flow.warranty";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_SUBJECT: &str = "compare.subject";
    pub const COMPARE_COMPETITOR: &str = "compare.competitor";
    pub const COMPARE_MONTHLY_FUEL_SAVINGS: &str = "compare.monthly_fuel_savings";
    pub const COMPARE_ANNUAL_FUEL_SAVINGS: &str = "compare.annual_fuel_savings";
    pub const COMPARE_TOTAL_MONTHLY_SAVINGS: &str = "compare.total_monthly_savings";
    pub const COMPARE_ANNUAL_TOTAL_SAVINGS: &str = "compare.annual_total_savings";
    pub const COMPARE_ROI: &str = "compare.roi";
    pub const COMPARE_ROI_YEARS: &str = "compare.roi_years";
    pub const COMPARE_ROI_UNDEFINED: &str = "compare.roi_undefined";

    pub const ENV_HEADING: &str = "environment.heading";
    pub const ENV_CO2: &str = "environment.co2";
    pub const ENV_TREES: &str = "environment.trees";
    pub const ENV_BOTTLES: &str = "environment.bottles";
    pub const ENV_NET_HARM: &str = "environment.net_harm";

    pub const MODES_HEADING: &str = "modes.heading";
    pub const MODES_ROW: &str = "modes.row";

    pub const SCHEDULE_HEADING: &str = "schedule.heading";
    pub const SCHEDULE_HEADER: &str = "schedule.header";
    pub const SCHEDULE_TOTAL_INTEREST: &str = "schedule.total_interest";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const VALIDATION_HEADING: &str = "validation.heading";
    pub const VALIDATION_PRICE_NOT_POSITIVE: &str = "validation.price_not_positive";
    pub const VALIDATION_INTEREST_NEGATIVE: &str = "validation.interest_negative";
    pub const VALIDATION_INTEREST_ZERO: &str = "validation.interest_zero";
    pub const VALIDATION_INTEREST_HIGH: &str = "validation.interest_high";
    pub const VALIDATION_LOAN_TOO_SHORT: &str = "validation.loan_too_short";
    pub const VALIDATION_LOAN_TOO_LONG: &str = "validation.loan_too_long";
    pub const VALIDATION_DOWNPAYMENT_LOW: &str = "validation.downpayment_low";
    pub const VALIDATION_DOWNPAYMENT_HIGH: &str = "validation.downpayment_high";
    pub const VALIDATION_HOURS_NOT_POSITIVE: &str = "validation.hours_not_positive";
    pub const VALIDATION_HOURS_EXCEED_DAY: &str = "validation.hours_exceed_day";
    pub const VALIDATION_FUEL_NOT_POSITIVE: &str = "validation.fuel_not_positive";

    pub const ERROR_ZERO_LOAN: &str = "error.zero_loan";
    pub const ERROR_NON_FINITE: &str = "error.non_finite";

    pub const GUI_INPUTS: &str = "gui.inputs";
    pub const GUI_LANGUAGE: &str = "gui.language";
    pub const GUI_SAVE_DEFAULTS: &str = "gui.save_defaults";
    pub const GUI_SAVED: &str = "gui.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 > 내장 문자열 순. 영어 번역이 없으면 한국어를 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }

    /// `{name}` 자리표시자를 값으로 치환한 번역을 돌려준다.
    pub fn fill(&self, key: &str, args: &[(&str, String)]) -> String {
        let mut out = self.t(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫/중첩 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content)?;
    debug!(path = %path.display(), entries = map.len(), "language pack loaded");
    Some(map)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "경고",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "굴삭기 월 보유 비용 계산기",
        MAIN_MENU_TITLE => "\n=== 굴삭기 월 보유 비용 계산기 ===",
        MAIN_MENU_COST => "1) 월 비용 계산",
        MAIN_MENU_COMPARE => "2) 경쟁 장비 비교",
        MAIN_MENU_MODES => "3) 작업 모드별 연료 소모량",
        MAIN_MENU_SCHEDULE => "4) 대출 상환 스케줄",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_DEFAULT_HINT => "(엔터: {default})",
        PROMPT_PRICE => "장비 현금 가격 (USD)",
        PROMPT_INTEREST_RATE => "이자율 (%)",
        PROMPT_LOAN_LENGTH => "대출 기간 (개월, 12~84)",
        PROMPT_DOWNPAYMENT => "선수금 (%, 10~50)",
        PROMPT_DAILY_HOURS => "일일 가동 시간",
        PROMPT_WORKING_MODE => "작업 모드 (1~8)",
        PROMPT_SUBJECT_MODE => "대상 장비 작업 모드 (1~8)",
        PROMPT_COMPETITOR_MODE => "경쟁 장비 작업 모드 (1~8)",
        COST_HEADING => "\n-- 월 보유 비용 --",
        RESULT_TOTAL_MONTHLY => "월 총비용",
        RESULT_LOAN_AMOUNT => "대출 원금",
        RESULT_MONTHLY_PAYMENT => "월 할부금",
        RESULT_PRINCIPAL => "월 원금 상환",
        RESULT_INTEREST => "월 이자",
        RESULT_OPERATOR => "운전원 인건비",
        RESULT_INSURANCE => "장비 보험료",
        RESULT_FUEL => "월 연료비",
        RESULT_ANNUAL_FUEL => "연간 연료비",
        RESULT_WARRANTY => "보증·정비 패키지",
        FLOW_HEADING => "\n-- 월 지출 흐름 --",
        FLOW_TOTAL => "월 총비용",
        FLOW_LOAN => "할부금",
        FLOW_PRINCIPAL => "원금",
        FLOW_INTEREST => "이자",
        FLOW_OPERATOR => "운전원 인건비",
        FLOW_INSURANCE => "장비 보험료",
        FLOW_FUEL => "연료비",
        FLOW_WARRANTY => "보증·정비 패키지",
        COMPARE_HEADING => "\n-- 경쟁 장비 비교 --",
        COMPARE_SUBJECT => "대상 장비",
        COMPARE_COMPETITOR => "경쟁 장비",
        COMPARE_MONTHLY_FUEL_SAVINGS => "월 연료비 절감",
        COMPARE_ANNUAL_FUEL_SAVINGS => "연간 연료비 절감",
        COMPARE_TOTAL_MONTHLY_SAVINGS => "월 총비용 절감",
        COMPARE_ANNUAL_TOTAL_SAVINGS => "연간 총비용 절감",
        COMPARE_ROI => "투자 회수 기간",
        COMPARE_ROI_YEARS => "{years}년",
        COMPARE_ROI_UNDEFINED => "회수 불가 (연료 절감 없음)",
        ENV_HEADING => "\n-- 연간 환경 효과 --",
        ENV_CO2 => "CO2 저감",
        ENV_TREES => "나무 1년 흡수량 환산",
        ENV_BOTTLES => "플라스틱 병 제조 환산",
        ENV_NET_HARM => "음수 값은 대상 장비가 연료를 더 소모한다는 뜻입니다.",
        MODES_HEADING => "\n-- 작업 모드별 연료 소모량 --",
        MODES_ROW => "모드 {mode}: {rate} L/h",
        SCHEDULE_HEADING => "\n-- 대출 상환 스케줄 --",
        SCHEDULE_HEADER => "회차 | 상환액 | 원금 | 이자 | 잔액",
        SCHEDULE_TOTAL_INTEREST => "총 이자",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어",
        SETTINGS_OPTIONS => "1) 언어  2) 대상 장비 모드  3) 경쟁 장비 모드  4) 기본 입력값",
        SETTINGS_LANGUAGE_OPTIONS => "1) 자동  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        VALIDATION_HEADING => "입력값 확인:",
        VALIDATION_PRICE_NOT_POSITIVE => "장비 가격은 0보다 커야 합니다 (입력: {value})",
        VALIDATION_INTEREST_NEGATIVE => "이자율은 음수일 수 없습니다 (입력: {value}%)",
        VALIDATION_INTEREST_ZERO => "이자율 0%: 원금만 균등 상환하는 무이자 할부로 계산합니다",
        VALIDATION_INTEREST_HIGH => "이자율 {value}%는 통상 상한 20%를 넘습니다",
        VALIDATION_LOAN_TOO_SHORT => "대출 기간은 최소 12개월입니다 (입력: {value}개월)",
        VALIDATION_LOAN_TOO_LONG => "대출 기간은 최대 84개월입니다 (입력: {value}개월)",
        VALIDATION_DOWNPAYMENT_LOW => "선수금은 최소 10%입니다 (입력: {value}%)",
        VALIDATION_DOWNPAYMENT_HIGH => "선수금은 최대 50%입니다 (입력: {value}%)",
        VALIDATION_HOURS_NOT_POSITIVE => "일일 가동 시간은 0보다 커야 합니다 (입력: {value}h)",
        VALIDATION_HOURS_EXCEED_DAY => "일일 가동 시간은 최대 24시간입니다 (입력: {value}h)",
        VALIDATION_FUEL_NOT_POSITIVE => "연료 소모량은 0보다 커야 합니다 (입력: {value} L/h)",
        ERROR_ZERO_LOAN => "대출 기간이 0개월이라 월 상환액을 계산할 수 없습니다",
        ERROR_NON_FINITE => "계산 결과가 유한하지 않습니다: {quantity}",
        GUI_INPUTS => "입력",
        GUI_LANGUAGE => "언어",
        GUI_SAVE_DEFAULTS => "현재 입력을 기본값으로 저장",
        GUI_SAVED => "저장되었습니다.",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting.",
        APP_TITLE => "Excavator Monthly Cost Calculator",
        MAIN_MENU_TITLE => "\n=== Excavator Monthly Cost Calculator ===",
        MAIN_MENU_COST => "1) Monthly cost",
        MAIN_MENU_COMPARE => "2) Compare with competitor",
        MAIN_MENU_MODES => "3) Fuel rate by working mode",
        MAIN_MENU_SCHEDULE => "4) Loan amortization schedule",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INVALID_NUMBER => "Please enter a number.",
        PROMPT_DEFAULT_HINT => "(enter: {default})",
        PROMPT_PRICE => "Total cash price of machine (USD)",
        PROMPT_INTEREST_RATE => "Interest rate (%)",
        PROMPT_LOAN_LENGTH => "Loan length (months, 12-84)",
        PROMPT_DOWNPAYMENT => "Downpayment (%, 10-50)",
        PROMPT_DAILY_HOURS => "Daily operating hours",
        PROMPT_WORKING_MODE => "Working mode (1-8)",
        PROMPT_SUBJECT_MODE => "Subject machine working mode (1-8)",
        PROMPT_COMPETITOR_MODE => "Competitor machine working mode (1-8)",
        COST_HEADING => "\n-- Monthly Cost --",
        RESULT_TOTAL_MONTHLY => "Total Monthly Cost",
        RESULT_LOAN_AMOUNT => "Loan Amount",
        RESULT_MONTHLY_PAYMENT => "Monthly Loan Payment",
        RESULT_PRINCIPAL => "Monthly Principal Payment",
        RESULT_INTEREST => "Monthly Interest Payment",
        RESULT_OPERATOR => "Operator Salary",
        RESULT_INSURANCE => "Machine Insurance",
        RESULT_FUEL => "Monthly Fuel Cost",
        RESULT_ANNUAL_FUEL => "Annual Fuel Cost",
        RESULT_WARRANTY => "Warranty and Service Package",
        FLOW_HEADING => "\n-- Monthly Outgoings --",
        FLOW_TOTAL => "Total Monthly Cost",
        FLOW_LOAN => "Loan Payment",
        FLOW_PRINCIPAL => "Principal Payment",
        FLOW_INTEREST => "Interest Payment",
        FLOW_OPERATOR => "Operator Salary",
        FLOW_INSURANCE => "Machine Insurance",
        FLOW_FUEL => "Fuel Cost",
        FLOW_WARRANTY => "Warranty and Service Package",
        COMPARE_HEADING => "\n-- Competitor Comparison --",
        COMPARE_SUBJECT => "Subject machine",
        COMPARE_COMPETITOR => "Competitor machine",
        COMPARE_MONTHLY_FUEL_SAVINGS => "Monthly fuel savings",
        COMPARE_ANNUAL_FUEL_SAVINGS => "Annual fuel savings",
        COMPARE_TOTAL_MONTHLY_SAVINGS => "Total monthly savings",
        COMPARE_ANNUAL_TOTAL_SAVINGS => "Total annual savings",
        COMPARE_ROI => "Return on investment",
        COMPARE_ROI_YEARS => "{years} years",
        COMPARE_ROI_UNDEFINED => "undefined (no fuel savings)",
        ENV_HEADING => "\n-- Annual Environmental Impact --",
        ENV_CO2 => "CO2 avoided",
        ENV_TREES => "Tree-years equivalent",
        ENV_BOTTLES => "Plastic bottles equivalent",
        ENV_NET_HARM => "Negative values mean the subject machine burns more fuel.",
        MODES_HEADING => "\n-- Fuel Rate by Working Mode --",
        MODES_ROW => "Mode {mode}: {rate} L/h",
        SCHEDULE_HEADING => "\n-- Loan Amortization Schedule --",
        SCHEDULE_HEADER => "Month | Payment | Principal | Interest | Balance",
        SCHEDULE_TOTAL_INTEREST => "Total interest",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language",
        SETTINGS_OPTIONS => "1) Language  2) Subject mode  3) Competitor mode  4) Default inputs",
        SETTINGS_LANGUAGE_OPTIONS => "1) Auto  2) 한국어  3) English",
        SETTINGS_PROMPT_CHANGE => "Number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        VALIDATION_HEADING => "Input check:",
        VALIDATION_PRICE_NOT_POSITIVE => "Machine price must be greater than 0 (got {value})",
        VALIDATION_INTEREST_NEGATIVE => "Interest rate cannot be negative (got {value}%)",
        VALIDATION_INTEREST_ZERO => "Interest rate 0%: computed as interest-free payments",
        VALIDATION_INTEREST_HIGH => "Interest rate {value}% is above the usual 20% ceiling",
        VALIDATION_LOAN_TOO_SHORT => "Loan length must be at least 12 months (got {value})",
        VALIDATION_LOAN_TOO_LONG => "Loan length must be at most 84 months (got {value})",
        VALIDATION_DOWNPAYMENT_LOW => "Downpayment must be at least 10% (got {value}%)",
        VALIDATION_DOWNPAYMENT_HIGH => "Downpayment must be at most 50% (got {value}%)",
        VALIDATION_HOURS_NOT_POSITIVE => "Daily operating hours must be above 0 (got {value})",
        VALIDATION_HOURS_EXCEED_DAY => "Daily operating hours cannot exceed 24 (got {value})",
        VALIDATION_FUEL_NOT_POSITIVE => "Fuel rate must be greater than 0 (got {value} L/h)",
        ERROR_ZERO_LOAN => "Loan length is 0 months, monthly payment is undefined",
        ERROR_NON_FINITE => "Computation produced a non-finite value: {quantity}",
        GUI_INPUTS => "Inputs",
        GUI_LANGUAGE => "Language",
        GUI_SAVE_DEFAULTS => "Save current inputs as defaults",
        GUI_SAVED => "Saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_placeholders() {
        let tr = Translator::new("en");
        let s = tr.fill(
            keys::MODES_ROW,
            &[("mode", "3".into()), ("rate", "8.5".into())],
        );
        assert_eq!(s, "Mode 3: 8.5 L/h");
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-us")), "en");
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[result]\nfuel = \"Fuel\"\n").expect("map");
        assert_eq!(map.get("result.fuel").map(String::as_str), Some("Fuel"));
    }
}
