pub mod add;
pub mod backup;
pub mod chart;
pub mod config;
pub mod del;
pub mod edit;
pub mod import;
pub mod log;
pub mod ordering;
pub mod recalc;
pub mod store;
pub mod validation;

use crate::db::repository::SqliteRepository;
use crate::errors::AppResult;
use store::RecordStore;

/// The store as used by the CLI: backed by the SQLite file.
pub type SqliteStore = RecordStore<SqliteRepository>;

pub fn open_store(db_path: &str) -> AppResult<SqliteStore> {
    RecordStore::open(SqliteRepository::open(db_path)?)
}
