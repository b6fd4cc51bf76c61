//! Simulation driver: datacenters from config, one manual client, then
//! parallel clients bound round-robin to datacenters.

use anyhow::Context;
use causal_core::CausalStoreConfig;
use causal_datacenter::{ClientSession, Datacenter};
use rayon::prelude::*;
use tracing::info;

/// Final state of a simulation run.
#[derive(Debug)]
pub struct SimulationReport {
    /// `(datacenter, rendered version vector)` in configuration order.
    pub versions: Vec<(String, String)>,
    pub total_writes: u64,
}

pub fn build_datacenters(config: &CausalStoreConfig) -> anyhow::Result<Vec<Datacenter>> {
    config
        .datacenters
        .iter()
        .map(|dc| {
            Datacenter::from_config(dc)
                .with_context(|| format!("invalid datacenter '{}'", dc.name))
        })
        .collect()
}

pub fn run(config: &CausalStoreConfig) -> anyhow::Result<SimulationReport> {
    let datacenters = build_datacenters(config)?;
    let Some(nearest) = datacenters.first() else {
        anyhow::bail!("no datacenters configured");
    };

    let manual = ClientSession::new("Client-Manual", nearest)?;
    manual.perform_write("key20", "sadiya")?;
    let read_back = manual.perform_read("key20")?;
    info!(
        session = manual.session_id(),
        value = ?read_back,
        "manual client read back"
    );

    let writes_per_client = config.simulation.writes_per_client;
    (0..config.simulation.clients)
        .into_par_iter()
        .try_for_each(|i| -> anyhow::Result<()> {
            let dc = &datacenters[i % datacenters.len()];
            let client = ClientSession::new(format!("Client-{i}"), dc)?;
            for j in 0..writes_per_client {
                client.perform_write(&format!("post{i}-{j}"), &format!("data{i}-{j}"))?;
            }
            Ok(())
        })?;

    let mut versions = Vec::with_capacity(datacenters.len());
    let mut total_writes = 0;
    for dc in &datacenters {
        total_writes += dc.write_count()?;
        versions.push((dc.name().to_string(), dc.version_vector()?.to_string()));
    }

    Ok(SimulationReport {
        versions,
        total_writes,
    })
}
