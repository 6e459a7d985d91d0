use chargelog::errors::AppError;
use chargelog::export::json::{parse_json, read_json};
use chargelog::export::{ExportFormat, ExportLogic, ExportTarget, HEADERS, SHEET_NAME};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

mod common;
use common::record;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 26).expect("date")
}

#[test]
fn default_file_names_use_date_and_suffix() {
    assert_eq!(ExportFormat::Json.default_file_name(day()), "2024-07-26记录.json");
    assert_eq!(ExportFormat::Xlsx.default_file_name(day()), "2024-07-26记录.xlsx");
    assert_eq!(ExportFormat::Csv.default_file_name(day()), "2024-07-26记录.csv");
}

#[test]
fn target_resolution() {
    let file = ExportTarget::File("out/my.json".into());
    assert_eq!(file.resolve(ExportFormat::Json, day()), std::path::PathBuf::from("out/my.json"));

    let dir = ExportTarget::Dir("out".into());
    assert_eq!(
        dir.resolve(ExportFormat::Xlsx, day()),
        std::path::Path::new("out").join("2024-07-26记录.xlsx")
    );
}

#[test]
fn json_export_reads_back_identically() {
    let tmp = tempdir().expect("tempdir");
    let mut records = vec![record("3/1", 100), record("3/15", 160)];
    records[1].range_added = 60;
    records[1].notes = "高速服务区".into();

    let path = ExportLogic::export(
        &records,
        ExportFormat::Json,
        &ExportTarget::Dir(tmp.path().to_path_buf()),
        day(),
        false,
    )
    .expect("export");

    assert_eq!(path, tmp.path().join("2024-07-26记录.json"));
    assert_eq!(read_json(&path).expect("read"), records);
}

#[test]
fn json_uses_camel_case_fields() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("records.json");

    ExportLogic::export(
        &[record("3/1", 100)],
        ExportFormat::Json,
        &ExportTarget::File(path.clone()),
        day(),
        false,
    )
    .expect("export");

    let content = fs::read_to_string(&path).expect("read");
    for field in ["\"chargingTime\"", "\"chargingCost\"", "\"totalRange\"", "\"rangeAdded\""] {
        assert!(content.contains(field), "missing {field}");
    }
}

#[test]
fn parse_json_fills_missing_id_and_range() {
    let json = r#"[{"date":"3/1","chargingTime":"2","chargingCost":30.5,"totalRange":100,"notes":""}]"#;
    let records = parse_json(json).expect("parse");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].range_added, 0);
    assert!(!records[0].id.is_nil());
    assert_eq!(records[0].charging_cost, 30.5);
}

#[test]
fn parse_json_tolerates_bom() {
    let json = "\u{feff}[]";
    assert!(parse_json(json).expect("parse").is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(parse_json("{not json"), Err(AppError::Json(_))));
    assert!(matches!(
        parse_json(r#"[{"date":"3/1"}]"#),
        Err(AppError::Json(_))
    ));
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("records.xlsx");

    ExportLogic::export(
        &[record("3/1", 100), record("3/15", 160)],
        ExportFormat::Xlsx,
        &ExportTarget::File(path.clone()),
        day(),
        false,
    )
    .expect("export");

    let bytes = fs::read(&path).expect("read");
    assert!(bytes.starts_with(b"PK"));
    assert_eq!(SHEET_NAME, "充电记录");
}

#[test]
fn csv_export_has_header_and_rows() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("nested").join("records.csv");

    let mut r = record("3/15", 160);
    r.range_added = 60;
    r.charging_time = "1.5".into();
    r.charging_cost = 22.5;
    r.notes = "home".into();

    ExportLogic::export(
        &[r],
        ExportFormat::Csv,
        &ExportTarget::File(path.clone()),
        day(),
        false,
    )
    .expect("export");

    let content = fs::read_to_string(&path).expect("read");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(HEADERS.join(",").as_str()));
    assert_eq!(lines.next(), Some("3/15,60,1.5,22.5,160,home"));
}

#[test]
fn forced_export_overwrites_existing_file() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("records.json");
    fs::write(&path, "old").expect("write");

    ExportLogic::export(
        &[],
        ExportFormat::Json,
        &ExportTarget::File(path.clone()),
        day(),
        true,
    )
    .expect("export");

    assert!(read_json(&path).expect("read").is_empty());
}

#[test]
fn full_precision_costs_survive_json_round_trip() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("precise.json");

    let costs = [54.781751339831196, 0.1 + 0.2, 1.0 / 3.0, 12.345678901234567, f64::MIN_POSITIVE];
    let records: Vec<_> = costs
        .iter()
        .enumerate()
        .map(|(i, cost)| {
            let mut r = record(&format!("3/{}", i + 1), 100 + i as i64);
            r.charging_cost = *cost;
            r
        })
        .collect();

    ExportLogic::export(
        &records,
        ExportFormat::Json,
        &ExportTarget::File(path.clone()),
        day(),
        false,
    )
    .expect("export");

    let back = read_json(&path).expect("read");
    assert_eq!(back, records);
    for (r, cost) in back.iter().zip(costs) {
        assert_eq!(r.charging_cost.to_bits(), cost.to_bits());
    }
}
