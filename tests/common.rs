#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const STUDY_RAW: &str = "Study,11 M12 2018 01:40,11 M12 2018 02:43,63\n";
pub const STUDY_CLEAN: &str = "Study,2018-12-11 01:40,2018-12-11 02:43,63";

pub fn mz() -> Command {
    cargo_bin_cmd!("minutize")
}

/// Create a unique file path inside the system temp dir and remove any existing file
pub fn temp_file(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_minutize.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temp file holding `content`
pub fn temp_input(name: &str, content: &str) -> String {
    let p = temp_file(name, "csv");
    fs::write(&p, content).expect("write test input");
    p
}

/// Raw / clean / minutes paths for one test, all freshly removed
pub fn stage_paths(name: &str) -> (String, String, String) {
    (
        temp_file(&format!("{name}_raw"), "csv"),
        temp_file(&format!("{name}_clean"), "csv"),
        temp_file(&format!("{name}_minutes"), "csv"),
    )
}

pub fn lines(path: &str) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
