//! Error handling for the causal store.
//! One error enum per concern, `thiserror` only.

pub mod causal_error;
pub mod config_error;

pub use causal_error::{CausalError, CausalResult};
pub use config_error::ConfigError;
