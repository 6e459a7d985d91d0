use super::sort_key::SortKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One charging session.
///
/// Field names on the wire are camelCase so that files written by the
/// mobile app import unchanged (`chargingTime`, `totalRange`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub date: String,         // free text, nominally "M/d" or "M/d/yyyy"
    pub charging_time: String, // free text, usually hours
    pub charging_cost: f64,
    pub total_range: i64, // odometer reading after charging
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub range_added: i64, // derived, see core::ordering
}

impl ChargingRecord {
    /// Build a fresh record from user input. `range_added` starts at 0 and
    /// is filled in by the ordering logic before the record is stored.
    pub fn from_draft(draft: RecordDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft)
    }

    pub fn with_id(id: Uuid, draft: RecordDraft) -> Self {
        Self {
            id,
            date: draft.date,
            charging_time: draft.charging_time,
            charging_cost: draft.charging_cost,
            total_range: draft.total_range,
            notes: draft.notes,
            range_added: 0,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from_date(&self.date)
    }

    /// First 8 characters of the id, as shown in listings.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub fn draft(&self) -> RecordDraft {
        RecordDraft {
            date: self.date.clone(),
            charging_time: self.charging_time.clone(),
            charging_cost: self.charging_cost,
            total_range: self.total_range,
            notes: self.notes.clone(),
        }
    }
}

/// The user-entered part of a record (everything except id and the
/// derived range).
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub date: String,
    pub charging_time: String,
    pub charging_cost: f64,
    pub total_range: i64,
    pub notes: String,
}

/// Partial update applied by `edit`; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub date: Option<String>,
    pub charging_time: Option<String>,
    pub charging_cost: Option<f64>,
    pub total_range: Option<i64>,
    pub notes: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.charging_time.is_none()
            && self.charging_cost.is_none()
            && self.total_range.is_none()
            && self.notes.is_none()
    }

    pub fn apply(&self, mut draft: RecordDraft) -> RecordDraft {
        if let Some(d) = &self.date {
            draft.date = d.clone();
        }
        if let Some(t) = &self.charging_time {
            draft.charging_time = t.clone();
        }
        if let Some(c) = self.charging_cost {
            draft.charging_cost = c;
        }
        if let Some(r) = self.total_range {
            draft.total_range = r;
        }
        if let Some(n) = &self.notes {
            draft.notes = n.clone();
        }
        draft
    }
}
