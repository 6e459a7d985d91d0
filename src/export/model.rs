// src/export/model.rs

use crate::models::ChargingRecord;

/// Worksheet name ("charging records").
pub const SHEET_NAME: &str = "充电记录";

/// Column labels: date, range added, charging time, cost, total range, notes.
pub const HEADERS: [&str; 6] = [
    "日期",
    "续航里程(km)",
    "充电时间(h)",
    "充电金额",
    "当前总续航(km)",
    "备注",
];

/// A single exported cell. Numbers stay numbers in the spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// One record as a spreadsheet/CSV row, in [`HEADERS`] order.
pub fn record_to_row(r: &ChargingRecord) -> [Cell; 6] {
    [
        Cell::Text(r.date.clone()),
        Cell::Number(r.range_added as f64),
        Cell::Text(r.charging_time.clone()),
        Cell::Number(r.charging_cost),
        Cell::Number(r.total_range as f64),
        Cell::Text(r.notes.clone()),
    ]
}
