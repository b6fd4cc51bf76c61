//! ReplicaStore - concurrent per-key access via DashMap.

use std::collections::BTreeMap;

use dashmap::DashMap;

use crate::VersionedValue;

/// Thread-safe key-value state for one datacenter.
///
/// At most one value per key; a `put` replaces the whole entry under the
/// key's shard lock, so readers never observe a partially written value.
#[derive(Debug, Default)]
pub struct ReplicaStore {
    entries: DashMap<String, VersionedValue>,
}

impl ReplicaStore {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Unconditionally overwrite `key` with an unversioned value.
    pub fn put(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), VersionedValue::unversioned(value));
    }

    /// Unconditionally overwrite `key` with a value and its version snapshot.
    pub fn put_versioned(&self, key: impl Into<String>, value: VersionedValue) {
        self.entries.insert(key.into(), value);
    }

    /// Current value for `key`, or `None` if it was never written.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|r| r.value.clone())
    }

    /// Current value with its version snapshot (cloned).
    pub fn get_versioned(&self, key: &str) -> Option<VersionedValue> {
        self.entries.get(key).map(|r| r.clone())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.iter().map(|r| r.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Sorted copy of every entry.
    ///
    /// Not atomic across shards on its own; callers needing a consistent
    /// view must exclude writers while copying.
    pub fn entries(&self) -> BTreeMap<String, VersionedValue> {
        self.entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }
}
