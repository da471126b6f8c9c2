use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{STUDY_CLEAN, STUDY_RAW, lines, mz, stage_paths, temp_file, temp_input};

#[test]
fn test_run_end_to_end() {
    let (raw, clean, minutes) = stage_paths("run_end_to_end");
    fs::write(&raw, STUDY_RAW).unwrap();

    mz().args(["run", "--raw", &raw, "--clean", &clean, "--minutes", &minutes])
        .assert()
        .success()
        .stdout(contains("clean: 1 rows read, 1 rows written"))
        .stdout(contains("minutize: 1 rows read, 63 rows written"));

    assert_eq!(lines(&clean), vec!["activity,start,end,minutes", STUDY_CLEAN]);

    let out = lines(&minutes);
    assert_eq!(out.len(), 64);
    assert_eq!(out[0], "date_time,activity");
    assert_eq!(out[1], "2018-12-11 02:43,Study");
    assert_eq!(out[63], "2018-12-11 01:41,Study");
}

#[test]
fn test_stages_run_separately() {
    let (raw, clean, minutes) = stage_paths("stages_separately");
    fs::write(
        &raw,
        "Walk,1 M3 2019 23:58,2 M3 2019 00:01,3\nRead,2 M3 2019 00:01,2 M3 2019 00:03,2\n",
    )
    .unwrap();

    mz().args(["clean", "--input", &raw, "--output", &clean])
        .assert()
        .success();
    assert_eq!(
        lines(&clean)[1..],
        ["Walk,2019-3-1 23:58,2019-3-2 00:01,3", "Read,2019-3-2 00:01,2019-3-2 00:03,2"]
    );

    mz().args(["minutize", "--input", &clean, "--output", &minutes])
        .assert()
        .success();
    assert_eq!(
        lines(&minutes),
        vec![
            "date_time,activity",
            "2019-03-02 00:01,Walk",
            "2019-03-02 00:00,Walk",
            "2019-03-01 23:59,Walk",
            "2019-03-02 00:03,Read",
            "2019-03-02 00:02,Read",
        ]
    );
}

#[test]
fn test_output_is_truncated() {
    let (raw, clean, _) = stage_paths("output_truncated");
    fs::write(&raw, STUDY_RAW).unwrap();
    fs::write(&clean, "old content\nmore old content\nand more\n").unwrap();

    mz().args(["clean", "--input", &raw, "--output", &clean])
        .assert()
        .success();
    assert_eq!(lines(&clean).len(), 2);
}

#[test]
fn test_skip_header_flag() {
    let (raw, clean, minutes) = stage_paths("skip_header_flag");
    fs::write(&raw, format!("activity,start,end,minutes\n{STUDY_RAW}")).unwrap();

    mz().args(["run", "--raw", &raw, "--clean", &clean, "--minutes", &minutes])
        .assert()
        .failure()
        .stderr(contains("Error: Line 1: malformed timestamp 'start'"));

    mz().args([
        "run",
        "--raw",
        &raw,
        "--clean",
        &clean,
        "--minutes",
        &minutes,
        "--skip-header",
    ])
    .assert()
    .success();
    assert_eq!(lines(&minutes).len(), 64);
}

#[test]
fn test_missing_input_fails() {
    let (raw, clean, minutes) = stage_paths("missing_input");

    mz().args(["run", "--raw", &raw, "--clean", &clean, "--minutes", &minutes])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Cannot access").and(contains("missing_input_raw")));

    assert!(fs::metadata(&minutes).is_err());
}

#[test]
fn test_invalid_duration_aborts_before_minutes_are_written() {
    let clean = temp_input(
        "invalid_duration_clean",
        "activity,start,end,minutes\nStudy,2018-12-11 01:40,2018-12-11 02:43,abc\n",
    );
    let minutes = temp_file("invalid_duration_minutes", "csv");

    mz().args(["minutize", "--input", &clean, "--output", &minutes])
        .assert()
        .failure()
        .stderr(contains("Line 2: invalid duration 'abc'"));

    assert_eq!(lines(&minutes), vec!["date_time,activity"]);
}

#[test]
fn test_invalid_month_fails() {
    let clean = temp_input(
        "invalid_month_clean",
        "activity,start,end,minutes\nStudy,2018-13-11 01:40,2018-13-11 02:43,63\n",
    );
    let minutes = temp_file("invalid_month_minutes", "csv");

    mz().args(["minutize", "--input", &clean, "--output", &minutes])
        .assert()
        .failure()
        .stderr(contains("not a valid calendar date/time: '2018-13-11 02:43'"));
}

#[test]
fn test_config_file_drives_paths_and_options() {
    let (raw, clean, minutes) = stage_paths("config_drives_paths");
    fs::write(&raw, "Nap,5 M6 2021 14:00,5 M6 2021 14:02,2\n").unwrap();

    let cfg = temp_input(
        "config_drives_paths_conf",
        &format!("raw_file: {raw}\nclean_file: {clean}\nminutes_file: {minutes}\npad_dates: true\n"),
    );

    mz().args(["--config", &cfg, "run"]).assert().success();

    assert_eq!(lines(&clean)[1], "Nap,2021-06-05 14:00,2021-06-05 14:02,2");
    assert_eq!(
        lines(&minutes)[1..],
        ["2021-06-05 14:02,Nap", "2021-06-05 14:01,Nap"]
    );
}

#[test]
fn test_config_init_and_print() {
    let cfg = temp_file("config_init_and_print", "conf");

    mz().args(["--config", &cfg, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file written"));

    mz().args(["--config", &cfg, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    mz().args(["--config", &cfg, "config", "--init", "--force"])
        .assert()
        .success();

    mz().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(
            contains("raw_file: data_raw.csv")
                .and(contains("minutes_file: data_minutes.csv"))
                .and(contains("skip_raw_header: false")),
        );
}

#[test]
fn test_broken_config_is_reported() {
    let cfg = temp_input("broken_config", "raw_file: [unclosed\n");

    mz().args(["--config", &cfg, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));

    mz().args(["--config", &cfg, "config", "--init", "--force"])
        .assert()
        .success();
}
