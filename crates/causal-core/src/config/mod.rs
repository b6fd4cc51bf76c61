//! Configuration for the causal store and its simulation driver.

pub mod datacenter_config;
pub mod defaults;
pub mod observability_config;
pub mod simulation_config;
pub mod store_config;

pub use datacenter_config::DatacenterConfig;
pub use observability_config::ObservabilityConfig;
pub use simulation_config::SimulationConfig;
pub use store_config::CausalStoreConfig;
