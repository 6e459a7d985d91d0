use crate::core::SqliteStore;
use crate::core::store::EditOutcome;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::RecordPatch;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::km_delta;

pub struct EditLogic;

impl EditLogic {
    pub fn apply(
        store: &mut SqliteStore,
        id_input: &str,
        patch: &RecordPatch,
        cascade: bool,
    ) -> AppResult<EditOutcome> {
        if patch.is_empty() {
            return Err(AppError::NothingToDo(
                "specify at least one of --date, --time, --cost, --total, --notes".into(),
            ));
        }

        let id = store.resolve_id(id_input)?;
        let outcome = store.update(id, patch, cascade)?;
        let record = &outcome.record;

        ttlog_quiet(
            store.repository().conn(),
            "edit",
            &record.short_id(),
            &format!(
                "date={} total={} added={} cascade={}",
                record.date, record.total_range, record.range_added, outcome.dependents_changed
            ),
        );

        success(format!(
            "Updated record {} ({}): range added {}.",
            record.short_id(),
            record.date,
            km_delta(record.range_added)
        ));

        let key = record.sort_key();
        let later = store
            .records()
            .iter()
            .filter(|r| r.sort_key() > key)
            .count();

        if cascade {
            info(format!(
                "Recomputed later records: {} value(s) changed.",
                outcome.dependents_changed
            ));
        } else if later > 0 {
            warning(format!(
                "{} later record(s) keep their stored range; use --cascade or `chargelog recalc` to refresh them.",
                later
            ));
        }

        Ok(outcome)
    }
}
