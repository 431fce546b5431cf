//! Explicit traversal handle over an [`OrderedMap`](crate::OrderedMap).
//!
//! A cursor yields owned clones of the keys it visits, so callers can keep a
//! key around after the traversal ends. Each cursor tracks its own position;
//! two cursors over the same map never disturb each other.

use crate::map::Node;

/// Traversal position over a map, created by
/// [`OrderedMap::cursor`](crate::OrderedMap::cursor).
///
/// A fresh cursor sits before the first entry. Once it reaches the last entry
/// it stays there: further calls to [`Cursor::next_key`] return `None`
/// without moving.
#[derive(Debug)]
pub struct Cursor<'a, K, V> {
    nodes: &'a [Node<K, V>],
    position: Option<usize>,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            position: self.position,
        }
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(nodes: &'a [Node<K, V>]) -> Self {
        Self {
            nodes,
            position: None,
        }
    }

    /// Entry under the cursor, if it has been positioned.
    pub fn current(&self) -> Option<(&'a K, &'a V)> {
        let nodes = self.nodes;
        self.position
            .map(|index| &nodes[index])
            .map(|node| (&node.key, &node.value))
    }
}

impl<K: Clone, V> Cursor<'_, K, V> {
    /// Move to the smallest key and return a copy of it.
    ///
    /// Returns `None` for an empty map.
    pub fn first(&mut self) -> Option<K> {
        if self.nodes.is_empty() {
            return None;
        }
        self.position = Some(0);
        Some(self.nodes[0].key.clone())
    }

    /// Advance to the next key and return a copy of it.
    ///
    /// Behaves like [`Cursor::first`] on a cursor that was never positioned.
    pub fn next_key(&mut self) -> Option<K> {
        match self.position {
            None => self.first(),
            Some(index) if index + 1 < self.nodes.len() => {
                self.position = Some(index + 1);
                Some(self.nodes[index + 1].key.clone())
            }
            Some(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod cursor_tests;
