use chargelog::core::store::RecordStore;
use chargelog::db::queries::count_records;
use chargelog::db::{DbPool, SqliteRepository};
use rusqlite::Connection;
use tempfile::tempdir;

mod common;
use common::draft;

#[test]
fn records_survive_reopening_in_list_order() {
    let tmp = tempdir().expect("tempdir");
    let db = tmp.path().join("records.sqlite");
    let db = db.to_string_lossy();

    let expected = {
        let mut store = RecordStore::open(SqliteRepository::open(&db).expect("repo")).expect("open");
        store.add(draft("3/15", 160)).expect("add");
        store.add(draft("3/1", 100)).expect("add");
        store.add(draft("n/a", 10)).expect("add");
        store.records().to_vec()
    };

    let store = RecordStore::open(SqliteRepository::open(&db).expect("repo")).expect("reopen");
    assert_eq!(store.records(), expected.as_slice());

    let dates: Vec<&str> = store.records().iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["3/1", "3/15", "n/a"]);
}

#[test]
fn rejected_import_keeps_database_content() {
    let tmp = tempdir().expect("tempdir");
    let db = tmp.path().join("rollback.sqlite");
    let db = db.to_string_lossy();

    let mut store = RecordStore::open(SqliteRepository::open(&db).expect("repo")).expect("open");
    store.add(draft("3/1", 100)).expect("add");

    let err = store.import(vec![common::record("", 100)]);
    assert!(err.is_err());

    let pool = DbPool::open(&db).expect("pool");
    assert_eq!(count_records(&pool.conn).expect("count"), 1);
}

#[test]
fn legacy_preferences_payload_is_imported_once() {
    let tmp = tempdir().expect("tempdir");
    let db = tmp.path().join("legacy.sqlite");

    {
        let conn = Connection::open(&db).expect("open");
        conn.execute_batch(
            r#"
            CREATE TABLE preferences (key TEXT PRIMARY KEY, value TEXT);
            INSERT INTO preferences (key, value) VALUES (
                'charging_records',
                '[{"id":"6f1c2b9e-3f43-4c55-9d0e-2f6a1b7c8d90","date":"3/1","chargingTime":"2","chargingCost":30,"totalRange":100,"notes":"","rangeAdded":100},
                  {"id":"0b7c4d8e-1a2b-4c3d-8e9f-a0b1c2d3e4f5","date":"3/15","chargingTime":"1.5","chargingCost":22.5,"totalRange":160,"notes":"","rangeAdded":60}]'
            );
            "#,
        )
        .expect("seed");
    }

    let db = db.to_string_lossy();

    let store = RecordStore::open(SqliteRepository::open(&db).expect("repo")).expect("open");
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.records()[1].range_added, 60);
    drop(store);

    // second open must not duplicate
    let pool = DbPool::open(&db).expect("pool");
    assert_eq!(count_records(&pool.conn).expect("count"), 2);
}
