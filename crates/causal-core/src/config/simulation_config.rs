use serde::{Deserialize, Serialize};

use super::defaults;

/// Workload shape for the simulation driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of client sessions, assigned round-robin to datacenters. Default: 3.
    pub clients: usize,
    /// Writes issued by each client session. Default: 1.
    pub writes_per_client: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            clients: defaults::DEFAULT_SIM_CLIENTS,
            writes_per_client: defaults::DEFAULT_SIM_WRITES_PER_CLIENT,
        }
    }
}
