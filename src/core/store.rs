//! In-memory record list plus its persistence collaborator.
//!
//! `RecordStore` is the single owner of the "current records" state. It is
//! loaded from the repository on open, and every mutation runs as one
//! read-modify-write on the repository before the in-memory copy is
//! replaced and subscribers are notified.

use crate::core::ordering::{
    insert_record, recompute_all, recompute_dependents, remove_record, replace_record,
};
use crate::core::validation::validate_import;
use crate::db::repository::RecordRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{ChargingRecord, RecordDraft, RecordPatch};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// Sent once to each new subscriber with the current list.
    Loaded,
    Added(Uuid),
    Updated { id: Uuid, dependents_changed: usize },
    Deleted(Uuid),
    Replaced(usize),
    Recomputed(usize),
}

pub type SubscriptionId = usize;

type Listener = Box<dyn FnMut(&StoreEvent, &[ChargingRecord])>;

#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub record: ChargingRecord,
    pub dependents_changed: usize,
}

pub struct RecordStore<R: RecordRepository> {
    repo: R,
    records: Vec<ChargingRecord>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl<R: RecordRepository> RecordStore<R> {
    pub fn open(mut repo: R) -> AppResult<Self> {
        let records = repo.read_all()?;
        Ok(Self {
            repo,
            records,
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    pub fn records(&self) -> &[ChargingRecord] {
        &self.records
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn subscribe<F>(&mut self, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent, &[ChargingRecord]) + 'static,
    {
        listener(&StoreEvent::Loaded, &self.records);

        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    fn commit(&mut self, records: Vec<ChargingRecord>, event: StoreEvent) {
        self.records = records;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event, &self.records);
        }
    }

    pub fn find(&self, id: Uuid) -> Option<&ChargingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Resolve a full id or a unique prefix of one (dashes optional).
    pub fn resolve_id(&self, input: &str) -> AppResult<Uuid> {
        let needle = input.trim().to_ascii_lowercase().replace('-', "");
        if needle.is_empty() {
            return Err(AppError::InvalidId(input.to_string()));
        }

        let mut matches = self
            .records
            .iter()
            .filter(|r| r.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(r), None) => Ok(r.id),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(input.to_string())),
            (None, _) => Err(AppError::RecordNotFound(input.to_string())),
        }
    }

    pub fn add(&mut self, draft: RecordDraft) -> AppResult<ChargingRecord> {
        let record = ChargingRecord::from_draft(draft);
        let (records, added) = self.repo.modify(|current| insert_record(current, record))?;

        self.commit(records, StoreEvent::Added(added.id));
        Ok(added)
    }

    /// Apply `patch` to the record and recompute its `range_added`.
    ///
    /// Later records keep their stored values unless `cascade` is set.
    pub fn update(&mut self, id: Uuid, patch: &RecordPatch, cascade: bool) -> AppResult<EditOutcome> {
        let (records, outcome) = self.repo.modify(|current| {
            let old = current
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;

            let old_key = old.sort_key();
            let edited = ChargingRecord::with_id(id, patch.apply(old.draft()));

            let (mut next, record) = replace_record(current, edited)?;

            let dependents_changed = if cascade {
                // dependents of both the old and the new position
                recompute_dependents(&mut next, old_key.min(record.sort_key()))
            } else {
                0
            };

            let record = next
                .iter()
                .find(|r| r.id == id)
                .cloned()
                .unwrap_or(record);

            Ok((
                next,
                EditOutcome {
                    record,
                    dependents_changed,
                },
            ))
        })?;

        self.commit(
            records,
            StoreEvent::Updated {
                id,
                dependents_changed: outcome.dependents_changed,
            },
        );
        Ok(outcome)
    }

    pub fn delete(&mut self, id: Uuid) -> AppResult<ChargingRecord> {
        let (records, removed) = self.repo.modify(|current| remove_record(current, id))?;

        self.commit(records, StoreEvent::Deleted(id));
        Ok(removed)
    }

    /// Replace the whole list with `incoming` after validation.
    /// A rejected list leaves both the repository and the store untouched.
    pub fn import(&mut self, incoming: Vec<ChargingRecord>) -> AppResult<usize> {
        validate_import(&incoming).map_err(|e| AppError::ImportRejected(e.to_string()))?;

        let count = incoming.len();
        let (records, _) = self.repo.modify(|_| Ok((incoming, ())))?;

        self.commit(records, StoreEvent::Replaced(count));
        Ok(count)
    }

    /// Recompute `range_added` for every record; returns how many changed.
    pub fn recompute_all(&mut self) -> AppResult<usize> {
        let (records, changed) = self.repo.modify(|mut current| {
            let changed = recompute_all(&mut current);
            Ok((current, changed))
        })?;

        self.commit(records, StoreEvent::Recomputed(changed));
        Ok(changed)
    }
}
