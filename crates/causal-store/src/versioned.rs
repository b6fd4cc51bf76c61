use causal_clock::VersionVector;
use serde::{Deserialize, Serialize};

/// A stored value annotated with the version of the write that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedValue {
    pub value: String,
    pub version: VersionVector,
}

impl VersionedValue {
    pub fn new(value: impl Into<String>, version: VersionVector) -> Self {
        Self {
            value: value.into(),
            version,
        }
    }

    /// A value with no causal history, as written through the bare `put`.
    pub fn unversioned(value: impl Into<String>) -> Self {
        Self::new(value, VersionVector::new())
    }
}
