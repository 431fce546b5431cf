//! Sorted associative container

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::slice;

use crate::cursor::Cursor;
use crate::error::{MapError, MapResult};

/// Key ordering used by a map. Must be a total order over the keys stored.
pub type Comparator<K> = fn(&K, &K) -> Ordering;

#[derive(Debug, Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Map whose entries are kept strictly increasing by key.
///
/// Values are owned by the map: `put` moves them in, `get` lends them out and
/// `try_clone` produces an independent deep copy.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    nodes: Vec<Node<K, V>>,
    compare: Comparator<K>,
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Create an empty map ordered by `K`'s natural ordering.
    pub fn new() -> Self {
        Self::with_comparator(<K as Ord>::cmp)
    }
}

impl<K: Ord, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Create an empty map ordered by `compare`.
    pub fn with_comparator(compare: Comparator<K>) -> Self {
        Self {
            nodes: Vec::new(),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Linear scan for `key`.
    ///
    /// `Ok(index)` when present, otherwise `Err(index)` where it would be
    /// inserted to keep the order.
    fn locate(&self, key: &K) -> Result<usize, usize> {
        for (index, node) in self.nodes.iter().enumerate() {
            match (self.compare)(&node.key, key) {
                Ordering::Less => continue,
                Ordering::Equal => return Ok(index),
                Ordering::Greater => return Err(index),
            }
        }
        Err(self.nodes.len())
    }

    /// Insert `value` under `key`, or overwrite the value already stored there.
    ///
    /// Returns the previous value when the key was present. Fails with
    /// [`MapError::OutOfMemory`] if room for a new entry cannot be reserved,
    /// in which case the map is unchanged.
    pub fn put(&mut self, key: K, value: V) -> MapResult<Option<V>> {
        match self.locate(&key) {
            Ok(index) => Ok(Some(mem::replace(&mut self.nodes[index].value, value))),
            Err(index) => {
                self.nodes.try_reserve(1)?;
                self.nodes.insert(index, Node { key, value });
                Ok(None)
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.locate(key).ok().map(|index| &self.nodes[index].value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.locate(key) {
            Ok(index) => Some(&mut self.nodes[index].value),
            Err(_) => None,
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.locate(key).is_ok()
    }

    /// Remove the entry for `key` and return its value.
    pub fn remove(&mut self, key: &K) -> MapResult<V> {
        match self.locate(key) {
            Ok(index) => Ok(self.nodes.remove(index).value),
            Err(_) => Err(MapError::NotFound),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Deep copy of the map.
    ///
    /// Storage for every entry is reserved up front, so on failure nothing has
    /// been cloned and `self` is untouched.
    pub fn try_clone(&self) -> MapResult<Self>
    where
        K: Clone,
        V: Clone,
    {
        let mut nodes = Vec::new();
        nodes.try_reserve_exact(self.nodes.len())?;
        nodes.extend(self.nodes.iter().cloned());
        Ok(Self {
            nodes,
            compare: self.compare,
        })
    }

    /// Start a new traversal. See [`Cursor`].
    pub fn cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(&self.nodes)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.nodes.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            inner: self.nodes.iter_mut(),
        }
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + '_ {
        self.nodes.iter().map(|node| &node.key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }

    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + '_ {
        self.nodes.iter_mut().map(|node| &mut node.value)
    }

    /// Entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.nodes.first().map(|node| (&node.key, &node.value))
    }

    /// Entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.nodes.last().map(|node| (&node.key, &node.value))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Borrowing iterator over a map in ascending key order.
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Node<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|node| (&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over a map with mutable access to the values.
///
/// Keys stay immutable so the ordering cannot be broken through it.
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, Node<K, V>>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (&node.key, &mut node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

#[cfg(test)]
#[path = "map_tests.rs"]
mod map_tests;
