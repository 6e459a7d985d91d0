use crate::core::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::{ChargingRecord, RecordDraft};
use crate::ui::messages::success;
use crate::utils::formatting::{km, km_delta};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &mut SqliteStore, draft: RecordDraft) -> AppResult<ChargingRecord> {
        let record = store.add(draft)?;

        ttlog_quiet(
            store.repository().conn(),
            "add",
            &record.short_id(),
            &format!(
                "date={} total={} added={} cost={}",
                record.date, record.total_range, record.range_added, record.charging_cost
            ),
        );

        success(format!(
            "Added record {} on {}: {} (total {}).",
            record.short_id(),
            record.date,
            km_delta(record.range_added),
            km(record.total_range)
        ));

        Ok(record)
    }
}
