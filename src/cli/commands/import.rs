use crate::cli::commands::open_reporting_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, yes } = cmd {
        let path = expand_tilde(file);

        // parse + validate before asking anything
        let incoming = ImportLogic::load(&path)?;

        let mut store = open_reporting_store(cfg)?;

        if !*yes {
            warning(format!(
                "Importing will delete all {} existing record(s) and load {} from {}.",
                store.records().len(),
                incoming.len(),
                path.display()
            ));
            if !confirm("Continue?") {
                info("Import cancelled; nothing changed.");
                return Ok(());
            }
        }

        ImportLogic::commit(&mut store, incoming, &path)?;
    }
    Ok(())
}
