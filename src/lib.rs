//! 굴삭기 월 보유 비용 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod cli;
pub mod config;
pub mod cost;
pub mod i18n;
pub mod report;
pub mod ui_cli;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 로그 구독자를 초기화한다. `RUST_LOG`가 없으면 warn 이상만 stderr로 출력한다.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
