//! Entry point: load config, install logging, run the simulation.

mod driver;
mod telemetry;

use std::path::PathBuf;

use anyhow::Context;
use causal_core::config::defaults;
use causal_core::CausalStoreConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(defaults::ENV_CONFIG_PATH))
        .map(PathBuf::from);

    let config = CausalStoreConfig::load(config_path.as_deref())
        .context("failed to load causal store configuration")?;
    telemetry::init(&config.observability)?;

    info!(
        datacenters = config.datacenters.len(),
        clients = config.simulation.clients,
        "starting causal store simulation"
    );

    let report = driver::run(&config)?;
    for (name, version) in &report.versions {
        info!(datacenter = %name, version = %version, "final version vector");
    }
    info!(writes = report.total_writes, "simulation finished");
    Ok(())
}
