use crate::cli::commands::open_reporting_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::RecordPatch;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        cost,
        total,
        notes,
        cascade,
    } = cmd
    {
        let patch = RecordPatch {
            date: date.clone(),
            charging_time: time.clone(),
            charging_cost: *cost,
            total_range: *total,
            notes: notes.clone(),
        };

        let mut store = open_reporting_store(cfg)?;
        EditLogic::apply(&mut store, id, &patch, *cascade || cfg.cascade_recompute)?;
    }

    Ok(())
}
