use crate::core::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::ChargingRecord;
use crate::ui::messages::success;
use uuid::Uuid;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one record. Later records keep their stored `range_added`.
    pub fn apply(store: &mut SqliteStore, id: Uuid) -> AppResult<ChargingRecord> {
        let removed = store.delete(id)?;

        ttlog_quiet(
            store.repository().conn(),
            "del",
            &removed.short_id(),
            &format!("date={} total={}", removed.date, removed.total_range),
        );

        success(format!("Deleted record {} ({}).", removed.short_id(), removed.date));
        Ok(removed)
    }
}
