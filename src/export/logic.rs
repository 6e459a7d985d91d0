// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::xlsx::export_xlsx;
use crate::models::ChargingRecord;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Where an export lands: an explicit file, or a directory that receives
/// the default `yyyy-MM-dd记录.<ext>` name.
#[derive(Debug, Clone)]
pub enum ExportTarget {
    File(PathBuf),
    Dir(PathBuf),
}

impl ExportTarget {
    pub fn resolve(&self, format: ExportFormat, day: NaiveDate) -> PathBuf {
        match self {
            ExportTarget::File(p) => p.clone(),
            ExportTarget::Dir(d) => d.join(format.default_file_name(day)),
        }
    }
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` in list order; returns the written path.
    pub fn export(
        records: &[ChargingRecord],
        format: ExportFormat,
        target: &ExportTarget,
        day: NaiveDate,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = target.resolve(format, day);

        ensure_writable(&path, force)?;

        if records.is_empty() {
            warning("No records stored; the export will only contain headers.");
        }

        Self::write(records, format, &path)?;
        Ok(path)
    }

    fn write(records: &[ChargingRecord], format: ExportFormat, path: &Path) -> AppResult<()> {
        match format {
            ExportFormat::Json => export_json(records, path),
            ExportFormat::Xlsx => export_xlsx(records, path),
            ExportFormat::Csv => export_csv(records, path),
        }
    }
}
