//! Span definitions for the write path, the read path, and client sessions.

/// Create a write span.
#[macro_export]
macro_rules! write_span {
    ($datacenter:expr, $key:expr) => {
        tracing::info_span!("causal.write", datacenter = %$datacenter, key = %$key)
    };
}

/// Create a read span.
#[macro_export]
macro_rules! read_span {
    ($datacenter:expr, $key:expr) => {
        tracing::debug_span!("causal.read", datacenter = %$datacenter, key = %$key)
    };
}

/// Create a client session span.
#[macro_export]
macro_rules! session_span {
    ($session_id:expr, $datacenter:expr) => {
        tracing::info_span!("causal.session", session = %$session_id, datacenter = %$datacenter)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const WRITE: &str = "causal.write";
    pub const READ: &str = "causal.read";
    pub const SESSION: &str = "causal.session";
}
