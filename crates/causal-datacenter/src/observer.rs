//! Structured event sink for the datacenter boundary.
//!
//! The datacenter reports each applied write and each read to a
//! [`ReplicaObserver`] after releasing its lock. Core logic never logs
//! directly; swapping the observer changes where events go.

use std::time::Duration;

use causal_clock::VersionVector;
use tracing::{debug, info};

/// A write that has been applied and is visible to readers.
#[derive(Debug, Clone, Copy)]
pub struct WriteEvent<'a> {
    pub datacenter: &'a str,
    pub key: &'a str,
    /// Vector snapshot taken right after this write's increment.
    pub version: &'a VersionVector,
    pub latency: Duration,
}

/// A completed read.
#[derive(Debug, Clone, Copy)]
pub struct ReadEvent<'a> {
    pub datacenter: &'a str,
    pub key: &'a str,
    pub found: bool,
}

/// Receives write-path events from a datacenter.
pub trait ReplicaObserver: Send + Sync {
    fn on_write(&self, event: &WriteEvent<'_>);

    fn on_read(&self, _event: &ReadEvent<'_>) {}
}

/// Default observer: emits `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ReplicaObserver for TracingObserver {
    fn on_write(&self, event: &WriteEvent<'_>) {
        info!(
            datacenter = event.datacenter,
            key = event.key,
            version = %event.version,
            "applied write"
        );
    }

    fn on_read(&self, event: &ReadEvent<'_>) {
        debug!(
            datacenter = event.datacenter,
            key = event.key,
            found = event.found,
            "served read"
        );
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ReplicaObserver for NoopObserver {
    fn on_write(&self, _event: &WriteEvent<'_>) {}
}
