use crate::core::SqliteStore;
use crate::core::validation::validate_import;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::export::json::read_json;
use crate::models::ChargingRecord;
use crate::ui::messages::success;
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Read and validate an import file without touching the store.
    pub fn load(path: &Path) -> AppResult<Vec<ChargingRecord>> {
        let records = read_json(path)?;
        validate_import(&records).map_err(|e| AppError::ImportRejected(e.to_string()))?;
        Ok(records)
    }

    /// Replace every stored record with `records`.
    pub fn commit(
        store: &mut SqliteStore,
        records: Vec<ChargingRecord>,
        source: &Path,
    ) -> AppResult<usize> {
        let replaced = store.records().len();
        let count = store.import(records)?;

        ttlog_quiet(
            store.repository().conn(),
            "import",
            &source.to_string_lossy(),
            &format!("{} record(s) imported, {} replaced", count, replaced),
        );

        success(format!(
            "JSON import completed: {} record(s) loaded from {}.",
            count,
            source.display()
        ));
        Ok(count)
    }
}
