use clap::Parser;
use std::process::ExitCode;

use excavator_cost_toolbox::{
    app::{self, AppError},
    cli::Cli,
    config::{self, Config},
    i18n::Translator,
    init_tracing,
};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = match config::load_or_default_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = app::translator_for(&cli.lang, &Config::default());
            return report_failure(&tr, &AppError::from(err));
        }
    };
    let tr = app::translator_for(&cli.lang, &cfg);

    let result = match &cli.command {
        Some(command) => app::execute(command, &cfg, &tr),
        None => app::run(&mut cfg, &cli.config, &cli.lang),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&tr, &err),
    }
}

fn report_failure(tr: &Translator, err: &AppError) -> ExitCode {
    for line in app::error_lines(tr, err) {
        eprintln!("{line}");
    }
    ExitCode::FAILURE
}
