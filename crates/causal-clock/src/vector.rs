//! Version vector for causal ordering.
//!
//! Each datacenter owns one vector and advances only its own entry, once per
//! locally applied write. Comparisons take the other vector by shared
//! reference and never mutate either side.
//!
//! # Examples
//!
//! ```
//! use causal_clock::{CausalOrder, VersionVector};
//!
//! let mut a = VersionVector::new();
//! a.increment("DC1");
//!
//! let mut b = a.clone();
//! b.increment("DC1");
//! b.increment("DC2");
//!
//! assert!(a.is_causally_before(&b));
//! assert!(!b.is_causally_before(&a));
//! assert_eq!(a.compare(&b), CausalOrder::Before);
//! assert_eq!(b.to_string(), "{DC1: 2, DC2: 1}");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CausalOrder;

/// A version vector mapping replica IDs to monotonically increasing counters.
///
/// Absent entries read as 0. Entries are kept in replica-id order so that
/// rendering and iteration are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionVector {
    counters: BTreeMap<String, u64>,
}

impl VersionVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the entry for `replica_id` by exactly 1, starting from 0.
    ///
    /// Not synchronized: callers sharing a vector across threads must hold
    /// the owning datacenter's lock.
    pub fn increment(&mut self, replica_id: &str) -> u64 {
        let entry = self.counters.entry(replica_id.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Current counter for a replica (0 if absent).
    pub fn get(&self, replica_id: &str) -> u64 {
        self.counters.get(replica_id).copied().unwrap_or(0)
    }

    /// Returns true if `other` has observed everything `self` has observed.
    ///
    /// Every entry of `self` must be ≤ the same entry in `other` (absent
    /// reads as 0). Entries only present in `other` do not affect the
    /// result, so this is reflexive and is not a full equality check.
    pub fn is_causally_before(&self, other: &Self) -> bool {
        self.counters
            .iter()
            .all(|(replica_id, &counter)| counter <= other.get(replica_id))
    }

    /// Returns true if `self` has observed everything `other` has observed.
    pub fn dominates(&self, other: &Self) -> bool {
        other.is_causally_before(self)
    }

    /// Strict happened-before: `self ≤ other` everywhere and `<` somewhere.
    pub fn happens_before(&self, other: &Self) -> bool {
        self.compare(other) == CausalOrder::Before
    }

    /// Returns true if neither vector happened before the other.
    pub fn concurrent_with(&self, other: &Self) -> bool {
        self.compare(other).is_concurrent()
    }

    /// Compare over the union of both vectors' entries.
    pub fn compare(&self, other: &Self) -> CausalOrder {
        let mut self_le_other = true;
        let mut other_le_self = true;

        for (replica_id, &mine) in &self.counters {
            let theirs = other.get(replica_id);
            if mine > theirs {
                self_le_other = false;
            }
            if mine < theirs {
                other_le_self = false;
            }
        }

        // Entries only in other: self implicitly holds 0 there.
        for (replica_id, &theirs) in &other.counters {
            if theirs > 0 && !self.counters.contains_key(replica_id) {
                other_le_self = false;
            }
        }

        match (self_le_other, other_le_self) {
            (true, true) => CausalOrder::Equal,
            (true, false) => CausalOrder::Before,
            (false, true) => CausalOrder::After,
            (false, false) => CausalOrder::Concurrent,
        }
    }

    /// Merge with another vector: component-wise max.
    pub fn merge(&mut self, other: &Self) {
        for (replica_id, &theirs) in &other.counters {
            let entry = self.counters.entry(replica_id.clone()).or_insert(0);
            *entry = (*entry).max(theirs);
        }
    }

    /// Replica IDs present in this vector, in ascending order.
    pub fn replicas(&self) -> Vec<&str> {
        self.counters.keys().map(String::as_str).collect()
    }

    /// Iterate `(replica_id, counter)` pairs in ascending replica order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counters.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for VersionVector {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counters: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for VersionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (replica_id, counter)) in self.counters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{replica_id}: {counter}")?;
        }
        f.write_str("}")
    }
}
