//! Insertion-ordered occurrence counting.
//!
//! Ties for the highest count resolve to the key that was first seen, so the
//! tally keeps keys in first-insertion order rather than sorting them.

use std::hash::Hash;

use indexmap::IndexMap;

/// Occurrence counts per key, remembering the order keys first appeared.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: IndexMap<K, usize>,
}

impl<K: Eq + Hash> Tally<K> {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    /// Count one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// The key with the highest count.
    ///
    /// When several keys share the highest count, the one that first appeared
    /// wins. Returns `None` for an empty tally.
    pub fn most_frequent(&self) -> Option<&K> {
        let max = self.counts.values().copied().max()?;
        self.counts
            .iter()
            .find(|(_, n)| **n == max)
            .map(|(k, _)| k)
    }
}

impl<K: Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Self::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
