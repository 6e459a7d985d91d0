// src/export/json.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::ChargingRecord;
use crate::ui::messages::info;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Export the full list as a pretty-printed UTF-8 JSON array.
pub(crate) fn export_json(records: &[ChargingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Parse a JSON array of records. Does not validate field contents.
pub fn read_json(path: &Path) -> AppResult<Vec<ChargingRecord>> {
    let content = fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn parse_json(content: &str) -> AppResult<Vec<ChargingRecord>> {
    // tolerate a UTF-8 BOM from editors on Windows
    let content = content.trim_start_matches('\u{feff}');
    Ok(serde_json::from_str(content)?)
}
