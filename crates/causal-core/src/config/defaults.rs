// Single source of truth for all default values.

// --- Datacenters ---
pub const DEFAULT_DATACENTERS: [(&str, u64); 3] = [("DC1", 5), ("DC2", 10), ("DC3", 15)];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Simulation ---
pub const DEFAULT_SIM_CLIENTS: usize = 3;
pub const DEFAULT_SIM_WRITES_PER_CLIENT: usize = 1;

// --- Environment ---
pub const ENV_CONFIG_PATH: &str = "CAUSAL_CONFIG";
pub const ENV_LOG_LEVEL: &str = "CAUSAL_LOG_LEVEL";
pub const ENV_JSON_LOGS: &str = "CAUSAL_JSON_LOGS";
pub const ENV_CLIENTS: &str = "CAUSAL_CLIENTS";
pub const ENV_WRITES_PER_CLIENT: &str = "CAUSAL_WRITES_PER_CLIENT";
