use crate::errors::{AppError, AppResult};
use crate::models::ChargingRecord;
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Key under which the mobile app kept its JSON-encoded record array.
const LEGACY_RECORDS_KEY: &str = "charging_records";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `records` table.
fn create_records_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id             TEXT PRIMARY KEY,
            position       INTEGER NOT NULL,
            date           TEXT NOT NULL,
            charging_time  TEXT NOT NULL,
            charging_cost  REAL NOT NULL DEFAULT 0,
            total_range    INTEGER NOT NULL,
            notes          TEXT NOT NULL DEFAULT '',
            range_added    INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_records_position ON records(position);
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Import the record array kept by the mobile app in a key-value
/// `preferences(key, value)` table, if such a table is present.
///
/// Runs once; skipped when `records` already has content.
fn migrate_legacy_preferences(conn: &Connection) -> AppResult<()> {
    let version = "20240726_0002_import_preferences_payload";

    if !table_exists(conn, "preferences")? || is_applied(conn, version)? {
        return Ok(());
    }

    let payload: Option<String> = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [LEGACY_RECORDS_KEY],
            |row| row.get(0),
        )
        .optional()?;

    let Some(payload) = payload else {
        return Ok(());
    };

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
    if existing > 0 {
        warning("Legacy preferences payload found, but records table is not empty; skipping.");
        mark_applied(conn, version, "Skipped legacy preferences payload: records not empty")?;
        return Ok(());
    }

    let records: Vec<ChargingRecord> = serde_json::from_str(&payload)
        .map_err(|e| AppError::Migration(format!("legacy payload is not valid JSON: {e}")))?;

    conn.execute_batch("BEGIN;")?;
    let result = crate::db::queries::store_records(conn, &records).and_then(|_| {
        mark_applied(conn, version, "Imported legacy preferences payload")?;
        Ok(())
    });

    match result {
        Ok(()) => conn.execute_batch("COMMIT;")?,
        Err(e) => {
            conn.execute_batch("ROLLBACK;")?;
            return Err(e);
        }
    }

    success(format!(
        "Migration applied: {} → imported {} legacy record(s)",
        version,
        records.len()
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Records table
    if !table_exists(conn, "records")? {
        create_records_table(conn)?;
        mark_applied(conn, "20240723_0001_create_records", "Created records table")?;
        success("Created records table.");
    }

    // 3) Legacy key-value payload
    migrate_legacy_preferences(conn)?;

    Ok(())
}
