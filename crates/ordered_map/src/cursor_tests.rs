use crate::OrderedMap;

fn sample() -> OrderedMap<u32, &'static str> {
    let mut map = OrderedMap::new();
    map.put(3, "c").unwrap();
    map.put(1, "a").unwrap();
    map.put(2, "b").unwrap();
    map
}

#[test]
fn test_cursor_walks_in_order() {
    let map = sample();
    let mut cursor = map.cursor();

    assert_eq!(cursor.first(), Some(1));
    assert_eq!(cursor.next_key(), Some(2));
    assert_eq!(cursor.current(), Some((&2, &"b")));
    assert_eq!(cursor.next_key(), Some(3));
    assert_eq!(cursor.next_key(), None);
}

#[test]
fn test_cursor_stays_on_last_entry_past_end() {
    let map = sample();
    let mut cursor = map.cursor();
    while cursor.next_key().is_some() {}

    assert_eq!(cursor.next_key(), None);
    assert_eq!(cursor.current(), Some((&3, &"c")));
}

#[test]
fn test_cursor_on_empty_map() {
    let map: OrderedMap<u32, ()> = OrderedMap::new();
    let mut cursor = map.cursor();
    assert_eq!(cursor.first(), None);
    assert_eq!(cursor.next_key(), None);
    assert!(cursor.current().is_none());
}

#[test]
fn test_unpositioned_cursor_starts_at_first() {
    let map = sample();
    let mut cursor = map.cursor();
    assert!(cursor.current().is_none());
    assert_eq!(cursor.next_key(), Some(1));
}

#[test]
fn test_nested_cursors_are_independent() {
    let map = sample();
    let mut pairs = Vec::new();

    let mut outer = map.cursor();
    let mut outer_key = outer.first();
    while let Some(a) = outer_key {
        let mut inner = map.cursor();
        let mut inner_key = inner.first();
        while let Some(b) = inner_key {
            if a < b {
                pairs.push((a, b));
            }
            inner_key = inner.next_key();
        }
        outer_key = outer.next_key();
    }

    assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 3)]);
}

#[test]
fn test_first_resets_position() {
    let map = sample();
    let mut cursor = map.cursor();
    cursor.first();
    cursor.next_key();
    assert_eq!(cursor.first(), Some(1));
    assert_eq!(cursor.next_key(), Some(2));
}
