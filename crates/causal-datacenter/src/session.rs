//! ClientSession - a client bound to exactly one datacenter.
//!
//! The session borrows its datacenter and holds no other state. Every
//! operation is forwarded unchanged: no retries, no error translation.
//! Moving a client to another datacenter would require carrying
//! [`ClientSession::observed_version`] along so causally dependent writes
//! are not split across replicas.

use causal_clock::VersionVector;
use causal_core::{CausalError, CausalResult};
use uuid::Uuid;

use crate::datacenter::{Datacenter, WriteReceipt};
use crate::session_span;

/// A client talking to its local datacenter.
#[derive(Debug, Clone)]
pub struct ClientSession<'a> {
    session_id: String,
    datacenter: &'a Datacenter,
}

impl<'a> ClientSession<'a> {
    pub fn new(session_id: impl Into<String>, datacenter: &'a Datacenter) -> CausalResult<Self> {
        let session_id = session_id.into();
        if session_id.trim().is_empty() {
            return Err(CausalError::InvalidSessionId(session_id));
        }
        Ok(Self {
            session_id,
            datacenter,
        })
    }

    /// Session with a generated UUID v4 identity.
    pub fn anonymous(datacenter: &'a Datacenter) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            datacenter,
        }
    }

    /// Forward a write to the bound datacenter.
    pub fn perform_write(&self, key: &str, value: &str) -> CausalResult<WriteReceipt> {
        let _span = session_span!(self.session_id, self.datacenter.name()).entered();
        self.datacenter.apply_write(key, value)
    }

    /// Forward a read to the bound datacenter.
    pub fn perform_read(&self, key: &str) -> CausalResult<Option<String>> {
        let _span = session_span!(self.session_id, self.datacenter.name()).entered();
        self.datacenter.read(key)
    }

    /// The bound datacenter's current vector.
    pub fn observed_version(&self) -> CausalResult<VersionVector> {
        self.datacenter.version_vector()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn datacenter(&self) -> &'a Datacenter {
        self.datacenter
    }
}
