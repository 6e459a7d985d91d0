pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod recalc;

use crate::config::Config;
use crate::core::store::StoreEvent;
use crate::core::{SqliteStore, open_store};
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Open the record store for a command and report the stored count after
/// each mutation.
pub(crate) fn open_reporting_store(cfg: &Config) -> AppResult<SqliteStore> {
    let mut store = open_store(&cfg.database)?;

    store.subscribe(|event, records| {
        if !matches!(event, StoreEvent::Loaded) {
            info(format!("{} record(s) stored.", records.len()));
        }
    });

    Ok(store)
}
