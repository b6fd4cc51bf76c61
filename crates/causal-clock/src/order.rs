use serde::{Deserialize, Serialize};

/// Result of comparing two version vectors over the union of their entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CausalOrder {
    /// Every entry matches (absent counts as 0).
    Equal,
    /// `self` happened strictly before `other`.
    Before,
    /// `other` happened strictly before `self`.
    After,
    /// Neither observed everything the other did.
    Concurrent,
}

impl CausalOrder {
    /// Returns the ordering seen from the other side.
    pub fn reverse(self) -> Self {
        match self {
            CausalOrder::Before => CausalOrder::After,
            CausalOrder::After => CausalOrder::Before,
            other => other,
        }
    }

    pub fn is_concurrent(self) -> bool {
        self == CausalOrder::Concurrent
    }
}
