use clap::Parser;
use excavator_cost_toolbox::{
    app::{self, AppError},
    cli::{Cli, Command},
    config::Config,
    cost::{compute_cost_breakdown, CostError, ValidationIssue},
    i18n::{keys, Translator},
    report,
};
use std::io;

#[test]
fn cost_flags_override_config_defaults() {
    let cli = Cli::try_parse_from([
        "excavator_cost_cli",
        "cost",
        "--price",
        "100000",
        "--interest-rate",
        "12",
        "--mode",
        "5",
    ])
    .expect("parse");
    let cfg = Config::default();
    let command = cli.command.expect("subcommand");
    let inputs = command.inputs(&cfg);
    assert_eq!(inputs.price, 100_000.0);
    assert_eq!(inputs.interest_rate, 12.0);
    assert_eq!(inputs.fuel_rate_liters_per_hour, 11.0);
    assert_eq!(inputs.loan_length_months, cfg.inputs.loan_length_months);
    assert_eq!(inputs.downpayment_percent, cfg.inputs.downpayment_percent);
}

#[test]
fn fuel_rate_and_mode_conflict() {
    let parsed = Cli::try_parse_from([
        "excavator_cost_cli",
        "cost",
        "--fuel-rate",
        "12",
        "--mode",
        "3",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn no_subcommand_means_interactive() {
    let cli = Cli::try_parse_from(["excavator_cost_cli", "--lang", "en"]).expect("parse");
    assert!(cli.command.is_none());
    assert_eq!(cli.lang, "en");
}

#[test]
fn compare_accepts_modes_and_rates() {
    let cli = Cli::try_parse_from([
        "excavator_cost_cli",
        "compare",
        "--subject-mode",
        "4",
        "--competitor-rate",
        "18.5",
    ])
    .expect("parse");
    match cli.command {
        Some(Command::Compare {
            subject_mode,
            competitor_rate,
            ..
        }) => {
            assert_eq!(subject_mode, Some(4));
            assert_eq!(competitor_rate, Some(18.5));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn subcommand_validation_failure_is_reported_in_language() {
    let cli = Cli::try_parse_from(["excavator_cost_cli", "cost", "--downpayment", "5"])
        .expect("parse");
    let command = cli.command.expect("subcommand");
    let cfg = Config::default();
    let tr = Translator::new("en");

    let err = app::execute(&command, &cfg, &tr).unwrap_err();
    let lines = app::error_lines(&tr, &err);
    assert_eq!(lines[0], tr.t(keys::VALIDATION_HEADING));
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("at least 10%"), "{lines:?}");
}

#[test]
fn report_renders_breakdown_and_modes() {
    let tr = Translator::new("en");
    let b = compute_cost_breakdown(Config::default().inputs).expect("defaults are valid");
    let lines = report::breakdown_lines(&tr, &b);
    assert!(lines[0].starts_with("Total Monthly Cost: $"));
    assert_eq!(report::modes_lines(&tr).len(), 8);

    let err = CostError::Validation(vec![ValidationIssue::LoanTooLong(96)]);
    let ko = Translator::new("ko");
    let lines = report::error_lines(&ko, &err);
    assert!(lines[1].contains("96"));
}

#[test]
fn non_cost_errors_use_the_localized_prefix() {
    let err = AppError::Io(io::Error::new(io::ErrorKind::NotFound, "config.toml"));

    let en = app::error_lines(&Translator::new("en"), &err);
    assert_eq!(en.len(), 1);
    assert!(en[0].starts_with("Error: "), "{en:?}");

    let ko = app::error_lines(&Translator::new("ko"), &err);
    assert!(ko[0].starts_with("오류: "), "{ko:?}");
}
