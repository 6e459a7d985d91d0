#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chargelog::models::{ChargingRecord, RecordDraft};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn chl() -> Command {
    let mut cmd = cargo_bin_cmd!("chargelog");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chargelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    chl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn add_record(db_path: &str, date: &str, time: &str, cost: &str, total: &str) {
    chl()
        .args([
            "--db", db_path, "add", "--date", date, "--time", time, "--cost", cost, "--total",
            total,
        ])
        .assert()
        .success();
}

/// Init the DB and add 3/1 (100 km) and 3/15 (160 km).
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_record(db_path, "3/1", "2", "30", "100");
    add_record(db_path, "3/15", "1.5", "22.5", "160");
}

/// Stored records, read back through a JSON export.
pub fn stored_records(db_path: &str, name: &str) -> Vec<ChargingRecord> {
    let out = temp_out(name, "json");
    chl()
        .args([
            "--db", db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let records = chargelog::export::json::read_json(std::path::Path::new(&out))
        .expect("read exported json");
    fs::remove_file(&out).ok();
    records
}

pub fn draft(date: &str, total: i64) -> RecordDraft {
    RecordDraft {
        date: date.to_string(),
        charging_time: "1".to_string(),
        charging_cost: 10.0,
        total_range: total,
        notes: String::new(),
    }
}

pub fn record(date: &str, total: i64) -> ChargingRecord {
    ChargingRecord::from_draft(draft(date, total))
}
