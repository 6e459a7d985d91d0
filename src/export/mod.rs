// src/export/mod.rs

mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::{ExportLogic, ExportTarget};
pub use model::{HEADERS, SHEET_NAME};

use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::path::Path;

/// Suffix appended to the date in default export file names ("records").
pub const FILE_SUFFIX: &str = "记录";

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    /// `yyyy-MM-dd记录.<ext>`
    pub fn default_file_name(&self, day: NaiveDate) -> String {
        format!("{}{}.{}", day.format("%Y-%m-%d"), FILE_SUFFIX, self.as_str())
    }
}
