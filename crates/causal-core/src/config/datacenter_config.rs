use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identity and simulated latency for one datacenter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatacenterConfig {
    /// Replica identifier, unique across the system.
    pub name: String,
    /// Simulated network latency in milliseconds. Inert in the write path.
    #[serde(default)]
    pub latency_ms: u64,
}

impl DatacenterConfig {
    pub fn new(name: impl Into<String>, latency_ms: u64) -> Self {
        Self {
            name: name.into(),
            latency_ms,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
