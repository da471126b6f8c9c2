use minutize::config::Config;
use minutize::core::Pipeline;
use minutize::errors::AppError;
use std::path::PathBuf;

#[test]
fn test_defaults_match_legacy_file_names() {
    let cfg = Config::default();
    assert_eq!(cfg.raw_file, "data_raw.csv");
    assert_eq!(cfg.clean_file, "data_clean.csv");
    assert_eq!(cfg.minutes_file, "data_minutes.csv");
    assert!(!cfg.skip_raw_header);
    assert!(!cfg.pad_dates);
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("skip_raw_header: true\nminutes_file: out.csv\n").unwrap();
    assert!(cfg.skip_raw_header);
    assert_eq!(cfg.minutes_file, "out.csv");
    assert_eq!(cfg.raw_file, "data_raw.csv");

    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
}

#[test]
fn test_yaml_round_trip() {
    let cfg = Config {
        pad_dates: true,
        ..Config::default()
    };
    let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("pad_dates: maybe\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = std::env::temp_dir().join("does_not_exist_minutize.conf");
    std::fs::remove_file(&path).ok();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_pipeline_from_config() {
    let cfg = Config {
        raw_file: "in.csv".into(),
        skip_raw_header: true,
        ..Config::default()
    };
    let pipeline = Pipeline::from_config(&cfg);
    assert_eq!(pipeline.raw, PathBuf::from("in.csv"));
    assert_eq!(pipeline.clean, PathBuf::from("data_clean.csv"));
    assert!(pipeline.options.skip_header);
    assert!(!pipeline.options.pad_dates);
}

#[test]
fn test_unreadable_config_keeps_the_io_cause() {
    let dir = std::env::temp_dir().join("unreadable_minutize_conf_dir");
    std::fs::create_dir_all(&dir).unwrap();

    let err = Config::load_from(&dir).unwrap_err();
    assert!(matches!(err, AppError::ConfigLoad(_)));
    assert!(std::error::Error::source(&err).is_some());
}
