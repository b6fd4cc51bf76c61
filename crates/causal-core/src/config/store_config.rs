//! Top-level causal store configuration with layered resolution.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, DatacenterConfig, ObservabilityConfig, SimulationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CAUSAL_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
///
/// # Examples
///
/// ```
/// use causal_core::CausalStoreConfig;
///
/// let config = CausalStoreConfig::default();
/// assert_eq!(config.datacenters.len(), 3);
/// assert_eq!(config.datacenters[0].name, "DC1");
/// assert_eq!(config.datacenters[0].latency_ms, 5);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalStoreConfig {
    pub datacenters: Vec<DatacenterConfig>,
    pub observability: ObservabilityConfig,
    pub simulation: SimulationConfig,
}

impl Default for CausalStoreConfig {
    fn default() -> Self {
        Self {
            datacenters: defaults::DEFAULT_DATACENTERS
                .iter()
                .map(|(name, latency_ms)| DatacenterConfig::new(*name, *latency_ms))
                .collect(),
            observability: ObservabilityConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl CausalStoreConfig {
    /// Load configuration: defaults, then the optional TOML file, then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing sections keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut Self) {
        if let Ok(val) = std::env::var(defaults::ENV_LOG_LEVEL) {
            config.observability.log_level = val.to_lowercase();
        }
        if let Ok(val) = std::env::var(defaults::ENV_JSON_LOGS) {
            match val.to_lowercase().as_str() {
                "1" | "true" | "yes" => config.observability.json_logs = true,
                "0" | "false" | "no" => config.observability.json_logs = false,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var(defaults::ENV_CLIENTS) {
            if let Ok(v) = val.parse::<usize>() {
                config.simulation.clients = v;
            }
        }
        if let Ok(val) = std::env::var(defaults::ENV_WRITES_PER_CLIENT) {
            if let Ok(v) = val.parse::<usize>() {
                config.simulation.writes_per_client = v;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.datacenters.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "datacenters".to_string(),
                message: "at least one datacenter is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for dc in &self.datacenters {
            if dc.name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "datacenters.name".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            if !seen.insert(dc.name.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "datacenters.name".to_string(),
                    message: format!("duplicate datacenter name '{}'", dc.name),
                });
            }
        }

        if !defaults::VALID_LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "'{}' is not one of {:?}",
                    self.observability.log_level,
                    defaults::VALID_LOG_LEVELS
                ),
            });
        }
        Ok(())
    }
}
