//! Ordering invariants of `OrderedMap` under arbitrary insertion orders

use std::collections::BTreeMap;

use ordered_map::OrderedMap;
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::thread_rng;

fn is_strictly_increasing(keys: &[i32]) -> bool {
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

#[test]
fn test_shuffled_insertion_yields_sorted_keys() {
    let mut keys: Vec<i32> = (1..=200).collect();
    keys.shuffle(&mut thread_rng());

    let mut map = OrderedMap::new();
    for key in &keys {
        map.put(*key, key * 10).unwrap();
    }

    let collected: Vec<i32> = map.keys().copied().collect();
    assert_eq!(collected, (1..=200).collect::<Vec<_>>());
    assert!(map.iter().all(|(k, v)| *v == k * 10));
}

#[test]
fn test_cursor_matches_iterator() {
    let mut keys: Vec<i32> = (0..50).map(|k| k * 3).collect();
    keys.shuffle(&mut thread_rng());

    let mut map = OrderedMap::new();
    for key in keys {
        map.put(key, ()).unwrap();
    }

    let mut via_cursor = Vec::new();
    let mut cursor = map.cursor();
    let mut next = cursor.first();
    while let Some(key) = next {
        via_cursor.push(key);
        next = cursor.next_key();
    }

    let via_iter: Vec<i32> = map.keys().copied().collect();
    assert_eq!(via_cursor, via_iter);
}

proptest! {
    #[test]
    fn prop_behaves_like_btreemap(ops in prop::collection::vec((any::<bool>(), -50i32..50, any::<u8>()), 0..200)) {
        let mut map = OrderedMap::new();
        let mut model = BTreeMap::new();

        for (insert, key, value) in ops {
            if insert {
                let previous = map.put(key, value).unwrap();
                prop_assert_eq!(previous, model.insert(key, value));
            } else {
                let removed = map.remove(&key).ok();
                prop_assert_eq!(removed, model.remove(&key));
            }
        }

        let keys: Vec<i32> = map.keys().copied().collect();
        prop_assert!(is_strictly_increasing(&keys));
        prop_assert_eq!(map.len(), model.len());
        let entries: Vec<(i32, u8)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(i32, u8)> = model.into_iter().collect();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn prop_try_clone_matches_source(keys in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut map = OrderedMap::new();
        for key in &keys {
            map.put(*key, key.wrapping_mul(7)).unwrap();
        }
        let copy = map.try_clone().unwrap();
        let left: Vec<_> = map.iter().collect();
        let right: Vec<_> = copy.iter().collect();
        prop_assert_eq!(left, right);
    }
}
