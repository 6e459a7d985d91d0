use crate::cli::commands::open_reporting_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use crate::utils::formatting::km;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_reporting_store(cfg)?;

        let record_id = store.resolve_id(id)?;
        let record = store
            .find(record_id)
            .cloned()
            .ok_or_else(|| AppError::RecordNotFound(id.clone()))?;

        //
        // Confirmation prompt
        //
        if !*yes {
            warning(format!(
                "Delete record {} ({}, total {})? This action is irreversible.",
                record.short_id(),
                record.date,
                km(record.total_range)
            ));
            if !confirm("Confirm") {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        DeleteLogic::apply(&mut store, record_id)?;
    }

    Ok(())
}
