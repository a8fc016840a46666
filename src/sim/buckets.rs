//! Key-ordered bucket map
//!
//! Maps keys to buckets while keeping the keys in comparator order, so that
//! iteration always walks buckets back-to-front no matter when each key first
//! appeared. Only distinct keys are sorted, which keeps the cost at
//! O(buckets) per new key instead of O(entities) per frame.

use std::cmp::Ordering;

/// Bucket map whose iteration order follows a caller-supplied comparator
#[derive(Debug, Clone)]
pub struct KeyOrderedMap<K, V> {
    entries: Vec<(K, V)>,
    compare: fn(&K, &K) -> Ordering,
}

impl<K: PartialEq, V> KeyOrderedMap<K, V> {
    pub fn new(compare: fn(&K, &K) -> Ordering) -> Self {
        Self {
            entries: Vec::new(),
            compare,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.position(key).map(|i| &mut self.entries[i].1)
    }

    /// Insert or replace a bucket. A new key is placed at its comparator slot
    /// (after any keys comparing equal); existing keys keep their slot.
    pub fn set(&mut self, key: K, bucket: V) -> Option<V> {
        if let Some(i) = self.position(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, bucket));
        }
        self.insert_sorted(key, bucket);
        None
    }

    /// Bucket for `key`, created with `make` if the key is new
    pub fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let index = match self.position(&key) {
            Some(i) => i,
            None => self.insert_sorted(key, make()),
        };
        &mut self.entries[index].1
    }

    /// Remove a key together with its bucket
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let i = self.position(key)?;
        Some(self.entries.remove(i).1)
    }

    /// Index of a key in iteration order
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.position(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert_sorted(&mut self, key: K, bucket: V) -> usize {
        let compare = self.compare;
        let index = self
            .entries
            .partition_point(|(k, _)| compare(k, &key) != Ordering::Greater);
        self.entries.insert(index, (key, bucket));
        index
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}
