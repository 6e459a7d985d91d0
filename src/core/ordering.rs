//! Chronological ordering of records and derivation of `range_added`.
//!
//! `range_added` is the odometer delta to the chronological predecessor:
//! the last record (in stable sort-key order) whose key is strictly less
//! than the target's key. A record without predecessor gets its full
//! `total_range`. Decreasing odometer readings yield negative values and are
//! kept as they are.

use crate::errors::{AppError, AppResult};
use crate::models::{ChargingRecord, SortKey};
use uuid::Uuid;

/// Stable sort by sort key; same-key records keep their input order.
pub fn sort_records(records: &mut [ChargingRecord]) {
    records.sort_by_key(ChargingRecord::sort_key);
}

/// Chronological predecessor of `key` within `records`.
pub fn find_predecessor(records: &[ChargingRecord], key: SortKey) -> Option<&ChargingRecord> {
    let mut ordered: Vec<&ChargingRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.sort_key());
    ordered.into_iter().rev().find(|r| r.sort_key() < key)
}

/// Overwrite `record.range_added` relative to `others`.
///
/// `others` must not contain a previous version of `record`.
pub fn derive_range_added(mut record: ChargingRecord, others: &[ChargingRecord]) -> ChargingRecord {
    record.range_added = range_from(&record, find_predecessor(others, record.sort_key()));
    record
}

fn range_from(record: &ChargingRecord, predecessor: Option<&ChargingRecord>) -> i64 {
    match predecessor {
        Some(prev) => record.total_range.saturating_sub(prev.total_range),
        None => record.total_range,
    }
}

/// Add a new record: derive its range, append, re-sort.
pub fn insert_record(
    mut records: Vec<ChargingRecord>,
    record: ChargingRecord,
) -> AppResult<(Vec<ChargingRecord>, ChargingRecord)> {
    if records.iter().any(|r| r.id == record.id) {
        return Err(AppError::InvalidId(format!(
            "a record with id {} already exists",
            record.id
        )));
    }

    let record = derive_range_added(record, &records);
    records.push(record.clone());
    sort_records(&mut records);
    Ok((records, record))
}

/// Replace the stored version of `record` (matched by id).
///
/// The predecessor search runs on the list without the old version; the new
/// version goes back to the old slot before the stable re-sort, so ties keep
/// their previous relative order.
pub fn replace_record(
    mut records: Vec<ChargingRecord>,
    record: ChargingRecord,
) -> AppResult<(Vec<ChargingRecord>, ChargingRecord)> {
    let idx = records
        .iter()
        .position(|r| r.id == record.id)
        .ok_or_else(|| AppError::RecordNotFound(record.id.to_string()))?;

    records.remove(idx);
    let record = derive_range_added(record, &records);
    records.insert(idx, record.clone());
    sort_records(&mut records);
    Ok((records, record))
}

/// Remove a record by id, keeping the order of the others.
pub fn remove_record(
    mut records: Vec<ChargingRecord>,
    id: Uuid,
) -> AppResult<(Vec<ChargingRecord>, ChargingRecord)> {
    let idx = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

    let removed = records.remove(idx);
    Ok((records, removed))
}

/// Recompute `range_added` for every record whose key satisfies `selected`.
/// Returns how many stored values changed.
fn recompute_where<F>(records: &mut [ChargingRecord], selected: F) -> usize
where
    F: Fn(SortKey) -> bool,
{
    let mut ordered: Vec<(SortKey, i64)> = records
        .iter()
        .map(|r| (r.sort_key(), r.total_range))
        .collect();
    ordered.sort_by_key(|(k, _)| *k);

    let mut changed = 0;
    for record in records.iter_mut() {
        let key = record.sort_key();
        if !selected(key) {
            continue;
        }

        // first index whose key is >= target; the one before it is the predecessor
        let idx = ordered.partition_point(|(k, _)| *k < key);
        let value = match idx.checked_sub(1).map(|i| ordered[i].1) {
            Some(prev_total) => record.total_range.saturating_sub(prev_total),
            None => record.total_range,
        };

        if record.range_added != value {
            record.range_added = value;
            changed += 1;
        }
    }

    changed
}

/// Recompute every record chronologically after `key`.
pub fn recompute_dependents(records: &mut [ChargingRecord], key: SortKey) -> usize {
    recompute_where(records, |k| k > key)
}

/// Recompute every record.
pub fn recompute_all(records: &mut [ChargingRecord]) -> usize {
    recompute_where(records, |_| true)
}
