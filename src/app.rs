use std::path::Path;
use thiserror::Error;

use crate::cli::{rate_or_mode, Command};
use crate::config::{Config, ConfigError};
use crate::cost::CostError;
use crate::i18n::{self, Translator};
use crate::report;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/표준입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 비용 계산 오류
    #[error("비용 계산 오류: {0}")]
    Cost(#[from] CostError),
}

/// 명령줄 언어 > 설정 언어 > 시스템 로케일 순으로 번역기를 만든다.
pub fn translator_for(cli_lang: &str, config: &Config) -> Translator {
    let lang = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
    Translator::new_with_pack(&lang, None)
}

/// 서브커맨드 하나를 실행하고 결과를 출력한다.
pub fn execute(command: &Command, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let inputs = command.inputs(config);
    match command {
        Command::Cost { .. } => ui_cli::show_cost(tr, inputs, &config.assumptions)?,
        Command::Compare {
            subject_mode,
            subject_rate,
            competitor_mode,
            competitor_rate,
            ..
        } => {
            let subject = rate_or_mode(*subject_rate, *subject_mode, config.subject_fuel_rate());
            let competitor =
                rate_or_mode(*competitor_rate, *competitor_mode, config.competitor_fuel_rate());
            ui_cli::show_comparison(tr, inputs, subject, competitor, &config.assumptions)?
        }
        Command::Schedule { .. } => ui_cli::show_schedule(tr, inputs)?,
        Command::Modes => ui_cli::show_modes(tr),
    }
    Ok(())
}

/// 대화형 CLI의 메인 루프를 실행한다. 설정 변경은 종료 전에 `config_path`에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, cli_lang: &str) -> Result<(), AppError> {
    let mut tr = translator_for(cli_lang, config);
    loop {
        match ui_cli::main_menu(&tr)? {
            MenuChoice::Cost => ui_cli::handle_cost(&tr, config)?,
            MenuChoice::Compare => ui_cli::handle_compare(&tr, config)?,
            MenuChoice::Modes => ui_cli::show_modes(&tr),
            MenuChoice::Schedule => ui_cli::handle_schedule(&tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(&tr, config)?;
                config.save_to(config_path)?;
                tr = translator_for("auto", config);
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 오류를 현재 언어의 문장으로 바꾼다. 계산 오류는 검증 목록까지 펼친다.
pub fn error_lines(tr: &Translator, err: &AppError) -> Vec<String> {
    match err {
        AppError::Cost(cost) => report::error_lines(tr, cost),
        other => vec![format!("{}: {other}", tr.t(i18n::keys::ERROR_PREFIX))],
    }
}
