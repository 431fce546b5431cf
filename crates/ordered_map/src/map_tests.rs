use super::*;

fn sample() -> OrderedMap<i32, String> {
    let mut map = OrderedMap::new();
    for key in [30, 10, 20] {
        map.put(key, format!("v{}", key)).unwrap();
    }
    map
}

#[test]
fn test_put_keeps_keys_sorted() {
    let map = sample();
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![10, 20, 30]);
    assert_eq!(map.len(), 3);
}

#[test]
fn test_put_overwrites_in_place() {
    let mut map = sample();
    let previous = map.put(20, "replaced".to_string()).unwrap();

    assert_eq!(previous.as_deref(), Some("v20"));
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&20).map(String::as_str), Some("replaced"));
}

#[test]
fn test_get_missing_key() {
    let map = sample();
    assert!(map.get(&15).is_none());
    assert!(!map.contains(&15));
    assert!(map.contains(&10));
}

#[test]
fn test_get_mut_updates_stored_value() {
    let mut map = sample();
    map.get_mut(&10).unwrap().push('!');
    assert_eq!(map.get(&10).map(String::as_str), Some("v10!"));
}

#[test]
fn test_remove() {
    let mut map = sample();
    assert_eq!(map.remove(&20).unwrap(), "v20");
    assert_eq!(map.remove(&20), Err(MapError::NotFound));
    assert_eq!(map.len(), 2);
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![10, 30]);
}

#[test]
fn test_try_clone_is_independent() {
    let original = sample();
    let mut copy = original.try_clone().unwrap();

    copy.put(40, "v40".to_string()).unwrap();
    copy.get_mut(&10).unwrap().clear();

    assert_eq!(original.len(), 3);
    assert_eq!(original.get(&10).map(String::as_str), Some("v10"));
    assert_eq!(copy.len(), 4);
    assert_eq!(copy.get(&10).map(String::as_str), Some(""));
}

#[test]
fn test_custom_comparator() {
    let mut map: OrderedMap<i32, ()> = OrderedMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    for key in [2, 9, 5] {
        map.put(key, ()).unwrap();
    }
    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![9, 5, 2]);
    assert_eq!(map.first_key_value().map(|(k, _)| *k), Some(9));
    assert_eq!(map.last_key_value().map(|(k, _)| *k), Some(2));
}

#[test]
fn test_iter_mut_and_clear() {
    let mut map = sample();
    for (key, value) in map.iter_mut() {
        *value = key.to_string();
    }
    let values: Vec<_> = map.values().cloned().collect();
    assert_eq!(values, vec!["10", "20", "30"]);

    map.clear();
    assert!(map.is_empty());
    assert!(map.iter().next().is_none());
}

#[test]
fn test_debug_lists_entries_in_order() {
    let mut map = OrderedMap::new();
    map.put(2, 'b').unwrap();
    map.put(1, 'a').unwrap();
    assert_eq!(format!("{:?}", map), "{1: 'a', 2: 'b'}");
}
