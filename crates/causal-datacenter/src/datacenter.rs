//! Datacenter - the write-path coordinator for one replica.
//!
//! Owns the `(VersionVector, ReplicaStore)` pair behind one `RwLock`.
//! Writers take the write lock for the increment and the store update
//! together; readers take the read lock, so every observation is a
//! consistent pair.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use causal_datacenter::{Datacenter, NoopObserver};
//! use std::sync::Arc;
//!
//! let dc = Datacenter::new("DC1", Duration::from_millis(5))
//!     .unwrap()
//!     .with_observer(Arc::new(NoopObserver));
//!
//! let receipt = dc.apply_write("key20", "sadiya").unwrap();
//! assert_eq!(receipt.version.get("DC1"), 1);
//! assert_eq!(dc.read("key20").unwrap().as_deref(), Some("sadiya"));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use causal_clock::VersionVector;
use causal_core::{CausalError, CausalResult, DatacenterConfig};
use causal_store::{ReplicaStore, VersionedValue};
use serde::{Deserialize, Serialize};

use crate::observer::{ReadEvent, ReplicaObserver, TracingObserver, WriteEvent};
use crate::{read_span, write_span};

/// Outcome of one applied write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReceipt {
    pub datacenter: String,
    pub key: String,
    /// Vector snapshot taken right after this write's increment.
    pub version: VersionVector,
}

/// A consistent copy of a datacenter's clock and state, taken under one lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaSnapshot {
    pub datacenter: String,
    pub version: VersionVector,
    pub entries: BTreeMap<String, VersionedValue>,
}

/// The state guarded by the datacenter lock.
#[derive(Debug, Default)]
struct Replica {
    version: VersionVector,
    store: ReplicaStore,
}

/// One datacenter: identity, simulated latency, and its replica.
pub struct Datacenter {
    name: String,
    latency: Duration,
    replica: RwLock<Replica>,
    observer: Arc<dyn ReplicaObserver>,
}

impl Datacenter {
    /// Create a datacenter with an empty vector and store.
    ///
    /// `latency` is carried for a replication layer and does not affect writes.
    pub fn new(name: impl Into<String>, latency: Duration) -> CausalResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CausalError::InvalidReplicaId(name));
        }
        Ok(Self {
            name,
            latency,
            replica: RwLock::new(Replica::default()),
            observer: Arc::new(TracingObserver),
        })
    }

    pub fn from_config(config: &DatacenterConfig) -> CausalResult<Self> {
        Self::new(config.name.clone(), config.latency())
    }

    /// Replace the event sink.
    pub fn with_observer(mut self, observer: Arc<dyn ReplicaObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Apply a local write as one causal event.
    ///
    /// Increments this datacenter's own vector entry by exactly 1 and stores
    /// `value` with the resulting snapshot, both under the write lock. An
    /// empty key is rejected before any state changes.
    pub fn apply_write(&self, key: &str, value: &str) -> CausalResult<WriteReceipt> {
        if key.is_empty() {
            return Err(CausalError::InvalidKey {
                reason: "key must not be empty".to_string(),
            });
        }
        let _span = write_span!(self.name, key).entered();

        let version = {
            let mut replica = self.write_lock()?;
            replica.version.increment(&self.name);
            let version = replica.version.clone();
            replica
                .store
                .put_versioned(key, VersionedValue::new(value, version.clone()));
            version
        };

        self.observer.on_write(&WriteEvent {
            datacenter: &self.name,
            key,
            version: &version,
            latency: self.latency,
        });

        Ok(WriteReceipt {
            datacenter: self.name.clone(),
            key: key.to_string(),
            version,
        })
    }

    /// Current value for `key`, or `None` if it was never written.
    pub fn read(&self, key: &str) -> CausalResult<Option<String>> {
        Ok(self.read_versioned(key)?.map(|v| v.value))
    }

    /// Current value for `key` with the version of the write that produced it.
    pub fn read_versioned(&self, key: &str) -> CausalResult<Option<VersionedValue>> {
        let _span = read_span!(self.name, key).entered();
        let found = self.read_lock()?.store.get_versioned(key);
        self.observer.on_read(&ReadEvent {
            datacenter: &self.name,
            key,
            found: found.is_some(),
        });
        Ok(found)
    }

    /// Owned snapshot of the current vector.
    pub fn version_vector(&self) -> CausalResult<VersionVector> {
        Ok(self.read_lock()?.version.clone())
    }

    /// Vector and every entry, copied under one read lock.
    pub fn snapshot(&self) -> CausalResult<ReplicaSnapshot> {
        let replica = self.read_lock()?;
        Ok(ReplicaSnapshot {
            datacenter: self.name.clone(),
            version: replica.version.clone(),
            entries: replica.store.entries(),
        })
    }

    /// Number of writes applied locally; equal to this datacenter's own entry.
    pub fn write_count(&self) -> CausalResult<u64> {
        Ok(self.read_lock()?.version.get(&self.name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn read_lock(&self) -> CausalResult<RwLockReadGuard<'_, Replica>> {
        self.replica
            .read()
            .map_err(|e| CausalError::ConcurrencyError(format!("replica lock poisoned: {e}")))
    }

    fn write_lock(&self) -> CausalResult<RwLockWriteGuard<'_, Replica>> {
        self.replica
            .write()
            .map_err(|e| CausalError::ConcurrencyError(format!("replica lock poisoned: {e}")))
    }
}

impl fmt::Debug for Datacenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Datacenter")
            .field("name", &self.name)
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}
