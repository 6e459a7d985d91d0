use crate::errors::{AppError, AppResult};
use crate::models::ChargingRecord;
use rusqlite::{Connection, Result, Row, params};
use uuid::Uuid;

/// Load every record in stored list order.
pub fn load_records(conn: &Connection) -> AppResult<Vec<ChargingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, charging_time, charging_cost, total_range, notes, range_added
         FROM records
         ORDER BY position ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<ChargingRecord> {
    let id_str: String = row.get("id")?;
    let id = Uuid::parse_str(&id_str).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidId(id_str.clone())),
        )
    })?;

    Ok(ChargingRecord {
        id,
        date: row.get("date")?,
        charging_time: row.get("charging_time")?,
        charging_cost: row.get("charging_cost")?,
        total_range: row.get("total_range")?,
        notes: row.get("notes")?,
        range_added: row.get("range_added")?,
    })
}

/// Replace the whole table content with `records`, `position` following the
/// slice order. Callers wrap this in a transaction.
pub fn store_records(conn: &Connection, records: &[ChargingRecord]) -> AppResult<()> {
    conn.execute("DELETE FROM records", [])?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO records (id, position, date, charging_time, charging_cost, total_range, notes, range_added)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    for (position, rec) in records.iter().enumerate() {
        stmt.execute(params![
            rec.id.to_string(),
            position as i64,
            rec.date,
            rec.charging_time,
            rec.charging_cost,
            rec.total_range,
            rec.notes,
            rec.range_added,
        ])?;
    }

    Ok(())
}

pub fn count_records(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
}
