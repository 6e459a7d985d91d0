//! Persistence seam for the record list.
//!
//! The store only ever reads the full list, computes a new one and writes it
//! back. Implementations make that read-modify-write atomic.

use crate::db::pool::DbPool;
use crate::db::queries::{load_records, store_records};
use crate::errors::AppResult;
use crate::models::ChargingRecord;
use rusqlite::{Connection, TransactionBehavior};

pub trait RecordRepository {
    fn read_all(&mut self) -> AppResult<Vec<ChargingRecord>>;

    fn write_all(&mut self, records: &[ChargingRecord]) -> AppResult<()>;

    /// Read the list, let `f` compute the replacement, write it back.
    /// Nothing is written when `f` fails.
    fn modify<T, F>(&mut self, f: F) -> AppResult<(Vec<ChargingRecord>, T)>
    where
        F: FnOnce(Vec<ChargingRecord>) -> AppResult<(Vec<ChargingRecord>, T)>,
    {
        let current = self.read_all()?;
        let (next, out) = f(current)?;
        self.write_all(&next)?;
        Ok((next, out))
    }
}

/// SQLite-backed repository; one row per record in table `records`.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open(path)?))
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl RecordRepository for SqliteRepository {
    fn read_all(&mut self) -> AppResult<Vec<ChargingRecord>> {
        load_records(&self.pool.conn)
    }

    fn write_all(&mut self, records: &[ChargingRecord]) -> AppResult<()> {
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        store_records(&tx, records)?;
        tx.commit()?;
        Ok(())
    }

    fn modify<T, F>(&mut self, f: F) -> AppResult<(Vec<ChargingRecord>, T)>
    where
        F: FnOnce(Vec<ChargingRecord>) -> AppResult<(Vec<ChargingRecord>, T)>,
    {
        // IMMEDIATE takes the write lock up front, so a concurrent writer
        // waits instead of interleaving between our read and write.
        let tx = self
            .pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = load_records(&tx)?;
        let (next, out) = f(current)?; // dropping tx rolls back
        store_records(&tx, &next)?;
        tx.commit()?;

        Ok((next, out))
    }
}
