//! # causal-datacenter
//!
//! The per-datacenter write path and the sessions that drive it.
//!
//! - [`Datacenter`] - owns one [`VersionVector`](causal_clock::VersionVector) and one
//!   [`ReplicaStore`](causal_store::ReplicaStore) behind a single lock; applies writes
//!   as one causal event
//! - [`ClientSession`] - binds a client to one datacenter and forwards its operations
//! - [`ReplicaObserver`] - structured event sink invoked at the write-path boundary
//!
//! ## Write Path
//!
//! `apply_write` increments the datacenter's own vector entry and stores the
//! value with the resulting snapshot inside one critical section. Readers take
//! the same lock, so no reader sees the clock advanced without the value or
//! the value without the clock.

pub mod datacenter;
pub mod observer;
pub mod session;
pub mod spans;

pub use datacenter::{Datacenter, ReplicaSnapshot, WriteReceipt};
pub use observer::{NoopObserver, ReadEvent, ReplicaObserver, TracingObserver, WriteEvent};
pub use session::ClientSession;
