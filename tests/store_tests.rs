use chargelog::core::store::{RecordStore, StoreEvent};
use chargelog::db::RecordRepository;
use chargelog::errors::{AppError, AppResult};
use chargelog::models::{ChargingRecord, RecordPatch};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

mod common;
use common::{draft, record};

/// Vec-backed repository counting writes.
#[derive(Default)]
struct MemoryRepo {
    records: Vec<ChargingRecord>,
    writes: usize,
}

impl RecordRepository for MemoryRepo {
    fn read_all(&mut self) -> AppResult<Vec<ChargingRecord>> {
        Ok(self.records.clone())
    }

    fn write_all(&mut self, records: &[ChargingRecord]) -> AppResult<()> {
        self.records = records.to_vec();
        self.writes += 1;
        Ok(())
    }
}

fn store_with(dates: &[(&str, i64)]) -> RecordStore<MemoryRepo> {
    let mut store = RecordStore::open(MemoryRepo::default()).expect("open");
    for (date, total) in dates {
        store.add(draft(date, *total)).expect("add");
    }
    store
}

fn recorder(store: &mut RecordStore<MemoryRepo>) -> Rc<RefCell<Vec<(StoreEvent, usize)>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event, records| {
        sink.borrow_mut().push((event.clone(), records.len()));
    });
    seen
}

#[test]
fn open_loads_existing_records() {
    let repo = MemoryRepo {
        records: vec![record("3/1", 100)],
        writes: 0,
    };
    let store = RecordStore::open(repo).expect("open");

    assert_eq!(store.records().len(), 1);
    assert_eq!(store.repository().writes, 0);
}

#[test]
fn subscriber_receives_current_list_immediately() {
    let mut store = store_with(&[("3/1", 100), ("3/2", 120)]);
    let seen = recorder(&mut store);

    assert_eq!(*seen.borrow(), vec![(StoreEvent::Loaded, 2)]);
}

#[test]
fn add_persists_and_notifies() {
    let mut store = store_with(&[("3/1", 100)]);
    let seen = recorder(&mut store);

    let added = store.add(draft("3/15", 160)).expect("add");

    assert_eq!(added.range_added, 60);
    assert_eq!(store.repository().records, store.records());
    assert_eq!(seen.borrow().last(), Some(&(StoreEvent::Added(added.id), 2)));
}

#[test]
fn update_without_cascade_leaves_later_records() {
    let mut store = store_with(&[("3/1", 100), ("3/15", 160)]);
    let first = store.records()[0].id;

    let patch = RecordPatch {
        total_range: Some(90),
        ..Default::default()
    };
    let outcome = store.update(first, &patch, false).expect("update");

    assert_eq!(outcome.record.range_added, 90);
    assert_eq!(outcome.dependents_changed, 0);
    assert_eq!(store.records()[1].range_added, 60);
}

#[test]
fn update_with_cascade_refreshes_later_records() {
    let mut store = store_with(&[("3/1", 100), ("3/15", 160), ("3/20", 200)]);
    let first = store.records()[0].id;
    let seen = recorder(&mut store);

    let patch = RecordPatch {
        total_range: Some(90),
        ..Default::default()
    };
    let outcome = store.update(first, &patch, true).expect("update");

    assert_eq!(outcome.dependents_changed, 1);
    assert_eq!(store.records()[1].range_added, 70);
    assert_eq!(store.records()[2].range_added, 40);
    assert_eq!(
        seen.borrow().last(),
        Some(&(
            StoreEvent::Updated {
                id: first,
                dependents_changed: 1
            },
            3
        ))
    );
}

#[test]
fn cascade_covers_records_between_old_and_new_position() {
    let mut store = store_with(&[("3/1", 100), ("3/10", 150), ("3/20", 200)]);
    let first = store.records()[0].id;

    // 3/1 moves after 3/10: 3/10 loses its predecessor
    let patch = RecordPatch {
        date: Some("3/12".into()),
        ..Default::default()
    };
    store.update(first, &patch, true).expect("update");

    let dates: Vec<&str> = store.records().iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["3/10", "3/12", "3/20"]);
    assert_eq!(store.records()[0].range_added, 150);
    assert_eq!(store.records()[1].range_added, -50);
    assert_eq!(store.records()[2].range_added, 100);
}

#[test]
fn update_unknown_id_writes_nothing() {
    let mut store = store_with(&[("3/1", 100)]);
    let writes = store.repository().writes;

    let patch = RecordPatch {
        notes: Some("x".into()),
        ..Default::default()
    };
    let err = store.update(Uuid::new_v4(), &patch, false).unwrap_err();

    assert!(matches!(err, AppError::RecordNotFound(_)));
    assert_eq!(store.repository().writes, writes);
}

#[test]
fn delete_removes_record() {
    let mut store = store_with(&[("3/1", 100), ("3/15", 160)]);
    let id = store.records()[0].id;
    let seen = recorder(&mut store);

    let removed = store.delete(id).expect("delete");

    assert_eq!(removed.date, "3/1");
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].range_added, 60);
    assert!(store.find(id).is_none());
    assert_eq!(seen.borrow().last(), Some(&(StoreEvent::Deleted(id), 1)));
}

#[test]
fn rejected_import_leaves_everything_untouched() {
    let mut store = store_with(&[("3/1", 100)]);
    let before = store.records().to_vec();
    let writes = store.repository().writes;
    let seen = recorder(&mut store);

    let bad = record("3/5", 0);
    let err = store.import(vec![record("3/2", 110), bad]).unwrap_err();

    assert!(matches!(err, AppError::ImportRejected(_)));
    assert_eq!(store.records(), before.as_slice());
    assert_eq!(store.repository().writes, writes);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn import_replaces_the_list_as_given() {
    let mut store = store_with(&[("3/1", 100)]);
    let seen = recorder(&mut store);

    // stored values are kept, no re-sort
    let mut late = record("5/1", 300);
    late.range_added = 7;
    let early = record("4/1", 200);
    let incoming = vec![late.clone(), early.clone()];

    assert_eq!(store.import(incoming.clone()).expect("import"), 2);
    assert_eq!(store.records(), incoming.as_slice());
    assert_eq!(store.repository().records, incoming);
    assert_eq!(seen.borrow().last(), Some(&(StoreEvent::Replaced(2), 2)));
}

#[test]
fn empty_import_clears_the_store() {
    let mut store = store_with(&[("3/1", 100)]);
    assert_eq!(store.import(Vec::new()).expect("import"), 0);
    assert!(store.records().is_empty());
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut store = store_with(&[]);
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.add(draft("3/1", 100)).expect("add");

    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn recompute_all_reports_changes() {
    let repo = MemoryRepo {
        records: vec![record("3/1", 100), record("3/15", 160)],
        writes: 0,
    };
    let mut store = RecordStore::open(repo).expect("open");

    assert_eq!(store.recompute_all().expect("recompute"), 2);
    assert_eq!(store.records()[1].range_added, 60);
    assert_eq!(store.recompute_all().expect("recompute"), 0);
}

#[test]
fn resolve_id_accepts_unique_prefixes() {
    let mut a = record("3/1", 100);
    a.id = Uuid::parse_str("aaaa1111-0000-4000-8000-000000000001").expect("uuid");
    let mut b = record("3/2", 120);
    b.id = Uuid::parse_str("aaaa2222-0000-4000-8000-000000000002").expect("uuid");

    let repo = MemoryRepo {
        records: vec![a.clone(), b.clone()],
        writes: 0,
    };
    let store = RecordStore::open(repo).expect("open");

    assert_eq!(store.resolve_id(&a.id.to_string()).expect("full"), a.id);
    assert_eq!(store.resolve_id("AAAA1").expect("prefix"), a.id);
    assert_eq!(store.resolve_id("aaaa2222-0000").expect("dashed"), b.id);

    assert!(matches!(store.resolve_id("aaaa"), Err(AppError::AmbiguousId(_))));
    assert!(matches!(store.resolve_id("ffff"), Err(AppError::RecordNotFound(_))));
    assert!(matches!(store.resolve_id(" "), Err(AppError::InvalidId(_))));
}
