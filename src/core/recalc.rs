use crate::core::SqliteStore;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub struct RecalcLogic;

impl RecalcLogic {
    pub fn apply(store: &mut SqliteStore) -> AppResult<usize> {
        let changed = store.recompute_all()?;

        ttlog_quiet(
            store.repository().conn(),
            "recalc",
            "",
            &format!("{} of {} record(s) changed", changed, store.records().len()),
        );

        success(format!(
            "Recomputed range for {} record(s); {} changed.",
            store.records().len(),
            changed
        ));
        Ok(changed)
    }
}
