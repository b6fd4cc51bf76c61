use super::ConfigError;

/// Result alias used across the write path.
pub type CausalResult<T> = Result<T, CausalError>;

/// Errors raised by datacenters, sessions, and their constructors.
///
/// Absent keys are not errors; reads return `None` for those.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    /// A replica identifier was empty or whitespace-only.
    #[error("invalid replica id: {0:?}")]
    InvalidReplicaId(String),

    /// A key was empty.
    #[error("invalid key: {reason}")]
    InvalidKey { reason: String },

    /// A client session identifier was empty or whitespace-only.
    #[error("invalid session id: {0:?}")]
    InvalidSessionId(String),

    /// A writer panicked while holding the replica lock.
    #[error("concurrency error: {0}")]
    ConcurrencyError(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
