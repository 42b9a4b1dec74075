use excavator_cost_toolbox::config::{load_or_default_at, Config};
use std::fs;

#[test]
fn missing_file_writes_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = load_or_default_at(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "language = \"ko\"\nsubject_mode = 3\n\n[inputs]\nprice = 120000.0\n",
    )
    .expect("write");

    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.subject_mode, 3);
    assert_eq!(cfg.subject_fuel_rate(), 8.5);
    assert_eq!(cfg.inputs.price, 120_000.0);
    assert_eq!(cfg.inputs.loan_length_months, 48);
    assert_eq!(cfg.assumptions.warranty_service_total, 9485.0);
}

#[test]
fn saved_changes_survive_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");

    let mut cfg = Config::default();
    cfg.competitor_mode = 7;
    cfg.inputs.interest_rate = 7.5;
    cfg.assumptions.fuel_price_per_liter = 1.4;
    cfg.save_to(&path).expect("save");

    let reloaded = load_or_default_at(&path).expect("load");
    assert_eq!(reloaded, cfg);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "subject_mode = \"fast\"\n").expect("write");
    assert!(load_or_default_at(&path).is_err());
}
