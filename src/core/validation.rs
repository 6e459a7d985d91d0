//! All-or-nothing validation of records coming from an import file.

use crate::models::ChargingRecord;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    BlankDate,
    BlankChargingTime,
    NegativeCost(f64),
    NonPositiveTotalRange(i64),
    DuplicateId(String),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BlankDate => write!(f, "date is blank"),
            Violation::BlankChargingTime => write!(f, "charging time is blank"),
            Violation::NegativeCost(c) => write!(f, "charging cost {c} is not >= 0"),
            Violation::NonPositiveTotalRange(r) => write!(f, "total range {r} is not > 0"),
            Violation::DuplicateId(id) => write!(f, "id {id} appears more than once"),
        }
    }
}

/// First offending record (0-based position in the candidate list).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub index: usize,
    pub violation: Violation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{}: {}", self.index + 1, self.violation)
    }
}

pub fn check_record(record: &ChargingRecord) -> Option<Violation> {
    if record.date.trim().is_empty() {
        return Some(Violation::BlankDate);
    }
    if record.charging_time.trim().is_empty() {
        return Some(Violation::BlankChargingTime);
    }
    if record.charging_cost.is_nan() || record.charging_cost < 0.0 {
        return Some(Violation::NegativeCost(record.charging_cost));
    }
    if record.total_range <= 0 {
        return Some(Violation::NonPositiveTotalRange(record.total_range));
    }
    None
}

pub fn validate_import(records: &[ChargingRecord]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if let Some(violation) = check_record(record) {
            return Err(ValidationError { index, violation });
        }
        if !seen.insert(record.id) {
            return Err(ValidationError {
                index,
                violation: Violation::DuplicateId(record.id.to_string()),
            });
        }
    }

    Ok(())
}

pub fn is_importable(records: &[ChargingRecord]) -> bool {
    validate_import(records).is_ok()
}
