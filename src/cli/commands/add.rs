use crate::cli::commands::open_reporting_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::models::RecordDraft;
use crate::utils::date;

/// Add a charging session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        time,
        cost,
        total,
        notes,
    } = cmd
    {
        let date = date
            .clone()
            .unwrap_or_else(|| date::today().format("%-m/%-d").to_string());

        let draft = RecordDraft {
            date,
            charging_time: time.clone(),
            charging_cost: *cost,
            total_range: *total,
            notes: notes.clone(),
        };

        let mut store = open_reporting_store(cfg)?;
        AddLogic::apply(&mut store, draft)?;
    }

    Ok(())
}
