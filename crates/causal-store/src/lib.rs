//! # causal-store
//!
//! Key-value state held by one datacenter.
//!
//! - [`ReplicaStore`] - concurrent map, last write observed wins per key
//! - [`VersionedValue`] - a value paired with the version vector of the write that produced it

pub mod replica_store;
pub mod versioned;

pub use replica_store::ReplicaStore;
pub use versioned::VersionedValue;
