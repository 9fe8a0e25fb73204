#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rsetlogger::store::{CsvSheet, SheetStore};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rsetlogger")
}

/// Create a unique test sheet path inside the system temp dir and remove any existing file
pub fn setup_test_sheet(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_set_log.csv", name));
    let sheet_path = path.to_string_lossy().to_string();
    fs::remove_file(&sheet_path).ok();
    sheet_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the sheet (header row only, no config file update)
pub fn init_sheet(sheet_path: &str) {
    rsl()
        .args(["--sheet", sheet_path, "--test", "init"])
        .assert()
        .success();
}

/// Log one set via the CLI, optionally joining an existing session
pub fn log_set(
    sheet_path: &str,
    day: &str,
    exercise: &str,
    weight: &str,
    reps: &str,
    session: Option<&str>,
) {
    let mut args = vec![
        "--sheet",
        sheet_path,
        "--test",
        "log",
        "--day",
        day,
        "--exercise",
        exercise,
        "--weight",
        weight,
        "--reps",
        reps,
    ];
    if let Some(s) = session {
        args.push("--session");
        args.push(s);
    }
    rsl().args(&args).assert().success();
}

/// Raw cell matrix of the sheet, header included
pub fn read_sheet(sheet_path: &str) -> Vec<Vec<String>> {
    CsvSheet::open(sheet_path)
        .expect("open sheet")
        .read_all()
        .expect("read sheet")
}

/// Id (first column) of the last data row in the sheet
pub fn last_row_id(sheet_path: &str) -> String {
    let matrix = read_sheet(sheet_path);
    matrix
        .last()
        .and_then(|row| row.first())
        .cloned()
        .expect("sheet has no data rows")
}

/// Initialize the sheet and seed a small two-session dataset
pub fn init_sheet_with_data(sheet_path: &str) {
    init_sheet(sheet_path);
    log_set(sheet_path, "upper_a", "barbell_bench", "100", "5", Some("sess-1"));
    log_set(sheet_path, "upper_a", "barbell_bench", "105", "5", Some("sess-1"));
    log_set(sheet_path, "lower_a", "hex_bar_deadlift", "225", "3", Some("sess-2"));
}
