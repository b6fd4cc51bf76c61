//! # causal-core
//!
//! Foundation crate for the causal store.
//! Defines configuration, errors, and compiled defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;

// Re-export the most commonly used types at the crate root.
pub use config::{CausalStoreConfig, DatacenterConfig};
pub use errors::{CausalError, CausalResult, ConfigError};
