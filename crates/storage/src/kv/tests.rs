use super::*;

fn exercise_ordered_map(map: &mut dyn OrderedKvMap) {
    assert!(map.is_empty().unwrap());
    assert_eq!(map.insert("b", b"2".to_vec()).unwrap(), None);
    assert_eq!(map.insert("a", b"1".to_vec()).unwrap(), None);
    assert_eq!(map.insert("c", b"3".to_vec()).unwrap(), None);
    assert_eq!(map.insert("b", b"22".to_vec()).unwrap(), Some(b"2".to_vec()));

    assert_eq!(map.len().unwrap(), 3);
    assert!(map.contains_key("a").unwrap());
    assert!(!map.contains_key("z").unwrap());
    assert_eq!(map.get("b").unwrap(), Some(b"22".to_vec()));
    assert_eq!(map.get("z").unwrap(), None);

    assert_eq!(map.keys().unwrap(), vec!["a", "b", "c"]);
    assert_eq!(
        map.values().unwrap(),
        vec![b"1".to_vec(), b"22".to_vec(), b"3".to_vec()]
    );
    let range = map.entries_range(1, 5).unwrap();
    assert_eq!(
        range.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(),
        vec!["b", "c"]
    );
    assert!(map.entries_range(3, 5).unwrap().is_empty());
    assert!(map.entries_range(0, 0).unwrap().is_empty());

    assert_eq!(map.remove("a").unwrap(), Some(b"1".to_vec()));
    assert_eq!(map.remove("a").unwrap(), None);
    assert_eq!(map.len().unwrap(), 2);
}

fn exercise_limits(map: &mut dyn OrderedKvMap) {
    let err = map.insert("toolong", b"v".to_vec()).unwrap_err();
    assert!(matches!(err, MapError::KeyTooLarge { len: 7, max: 4 }));
    let err = map.insert("k", vec![0u8; 9]).unwrap_err();
    assert!(matches!(err, MapError::ValueTooLarge { len: 9, max: 8 }));
    assert!(map.is_empty().unwrap());
    assert_eq!(map.insert("k", vec![0u8; 8]).unwrap(), None);
}

fn small_limits() -> MapLimits {
    MapLimits {
        max_key_bytes: 4,
        max_value_bytes: 8,
    }
}

#[test]
fn memory_map_is_ordered_by_key() {
    exercise_ordered_map(&mut MemoryMap::new());
}

#[test]
fn sqlite_map_is_ordered_by_key() {
    exercise_ordered_map(&mut SqliteMap::open_in_memory().unwrap());
}

#[test]
fn memory_map_enforces_limits() {
    exercise_limits(&mut MemoryMap::with_limits(small_limits()));
}

#[test]
fn sqlite_map_enforces_limits() {
    exercise_limits(
        &mut SqliteMap::open_in_memory()
            .unwrap()
            .with_limits(small_limits()),
    );
}

#[test]
fn key_order_is_bytewise_in_both_backends() {
    let keys = ["n10", "N2", "n-1", "n_1", "n2"];
    let mut memory = MemoryMap::new();
    let mut sqlite = SqliteMap::open_in_memory().unwrap();
    for key in keys {
        memory.insert(key, Vec::new()).unwrap();
        sqlite.insert(key, Vec::new()).unwrap();
    }
    let mut expected = keys.map(str::to_string).to_vec();
    expected.sort();
    assert_eq!(memory.keys().unwrap(), expected);
    assert_eq!(sqlite.keys().unwrap(), expected);
}

#[test]
fn sqlite_map_records_schema_version() {
    let map = SqliteMap::open_in_memory().unwrap();
    assert_eq!(map.schema_version().unwrap().as_deref(), Some("v1"));
    assert!(map.storage_dir().is_none());
}
