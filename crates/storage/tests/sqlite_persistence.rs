#![forbid(unsafe_code)]

use nb_storage::{
    CreateNoticeRequest, ManualClock, MapError, MapLimits, NoticeStore, OrderedKvMap,
    SequenceIdSource, SqliteMap, StoreError, UpdateNoticeRequest, decode, max_encoded_len,
};
use rusqlite::{Connection, params};

fn open(dir: &std::path::Path, clock: &ManualClock) -> NoticeStore<SqliteMap> {
    let map = SqliteMap::open(dir).expect("open sqlite map");
    NoticeStore::with_parts(map, clock.clone(), SequenceIdSource::new("gen-"))
}

#[test]
fn notices_survive_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let clock = ManualClock::new(1_700_000_000_000_000_000);

    let created = {
        let mut store = open(dir.path(), &clock);
        let created = store
            .create(CreateNoticeRequest::new("n1", "Fire Drill", "Evacuate at 10am"))
            .expect("create");
        store
            .create(CreateNoticeRequest::new("n2", "Office Closure", "Closed Friday"))
            .expect("create");
        clock.advance(1_000);
        store.delete("n2").expect("delete");
        created
    };

    let store = open(dir.path(), &clock);
    assert_eq!(store.get("n1").expect("get n1"), created);
    let n2 = store.get("n2").expect("get n2");
    assert!(!n2.is_active());
    assert_eq!(n2.updated_at(), Some(1_700_000_000_000_001_000));
    assert_eq!(store.len().expect("len"), 2);
    assert_eq!(
        store.map().schema_version().expect("schema version").as_deref(),
        Some("v1")
    );
}

#[test]
fn end_to_end_lifecycle_on_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let clock = ManualClock::new(10);
    let mut store = open(dir.path(), &clock);

    store
        .create(CreateNoticeRequest::new("n1", "Fire Drill", "Evacuate at 10am"))
        .expect("create");
    clock.advance(5);
    let mut request = UpdateNoticeRequest::new("n1");
    request.title = Some("Fire Drill Rescheduled".to_string());
    store.update(request).expect("update");

    let hits = store.search("rescheduled").expect("search");
    assert_eq!(hits.len(), 1);

    clock.advance(5);
    store.delete("n1").expect("delete");
    let after = store.get("n1").expect("get after delete");
    assert!(!after.is_active());
    assert_eq!(after.title(), "Fire Drill Rescheduled");
    assert_eq!(after.created_at(), 10);
    assert_eq!(after.updated_at(), Some(20));

    let err = store.delete("n1").expect_err("second delete");
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn stored_bytes_are_the_wire_encoding() {
    let dir = tempfile::tempdir().expect("temp dir");
    let clock = ManualClock::new(42);
    let mut store = open(dir.path(), &clock);
    let created = store
        .create(CreateNoticeRequest::new("n1", "Title", "Body"))
        .expect("create");
    drop(store);

    let conn = Connection::open(dir.path().join("noticeboard.db")).expect("open db");
    let bytes: Vec<u8> = conn
        .query_row("SELECT value FROM kv WHERE key=?1", params!["n1"], |row| {
            row.get(0)
        })
        .expect("select value");
    assert_eq!(decode(&bytes).expect("decode"), created);
    assert!(bytes.len() <= max_encoded_len());
}

#[test]
fn corrupt_row_is_reported_and_can_be_purged() {
    let dir = tempfile::tempdir().expect("temp dir");
    let clock = ManualClock::new(1);
    {
        let mut store = open(dir.path(), &clock);
        store
            .create(CreateNoticeRequest::new("good", "t", "d"))
            .expect("create");
    }
    let conn = Connection::open(dir.path().join("noticeboard.db")).expect("open db");
    conn.execute(
        "INSERT INTO kv(key, value) VALUES (?1, ?2)",
        params!["bad", br#"{"id":"bad"}"#.to_vec()],
    )
    .expect("insert corrupt row");
    drop(conn);

    let mut store = open(dir.path(), &clock);
    let err = store.get("bad").expect_err("corrupt get");
    assert!(matches!(err, StoreError::Decode { ref key, .. } if key == "bad"));
    assert!(store.list_all().is_err());
    store.purge("bad").expect("purge corrupt row");
    assert_eq!(store.list_all().expect("list").len(), 1);
}

#[test]
fn oversized_values_are_rejected_by_the_map() {
    let dir = tempfile::tempdir().expect("temp dir");
    let map = SqliteMap::open(dir.path())
        .expect("open sqlite map")
        .with_limits(MapLimits {
            max_key_bytes: 100,
            max_value_bytes: 64,
        });
    let mut store = NoticeStore::with_parts(map, ManualClock::new(1), SequenceIdSource::new("g"));

    let err = store
        .create(CreateNoticeRequest::new("n1", "t", "d".repeat(200)))
        .expect_err("value too large");
    assert!(matches!(
        err,
        StoreError::Map(MapError::ValueTooLarge { max: 64, .. })
    ));
    assert!(store.map().is_empty().expect("is empty"));
}
