// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, record_to_row};
use crate::export::notify_export_success;
use crate::models::ChargingRecord;
use crate::ui::messages::info;
use csv::Writer;
use std::path::Path;

/// Export CSV with the same columns as the spreadsheet.
pub(crate) fn export_csv(records: &[ChargingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for r in records {
        let row = record_to_row(r).map(|c| c.display());
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
