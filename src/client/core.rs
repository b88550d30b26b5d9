use crate::session::Session;
use crate::transport::{Payload, RequestSpec, Transport};
use crate::{ErrorEnvelope, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Shared client for every backend capability.
///
/// Cheap to clone; clones share the transport and the session.
#[derive(Clone)]
pub struct CyberClient {
    pub(crate) transport: Arc<dyn Transport>,
    session: Session,
}

impl CyberClient {
    /// Client configured from the environment with a fresh in-memory session.
    pub fn new() -> Result<Self> {
        crate::client::builder::CyberClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::builder::CyberClientBuilder {
        crate::client::builder::CyberClientBuilder::new()
    }

    /// Client over an arbitrary transport. The transport is responsible for
    /// honouring `session`.
    pub fn from_transport(transport: Arc<dyn Transport>, session: Session) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Sends a prepared request as is.
    pub async fn send(&self, spec: RequestSpec) -> std::result::Result<Payload, ErrorEnvelope> {
        self.transport.send(spec).await
    }

    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> std::result::Result<T, ErrorEnvelope> {
        self.transport.send(spec).await?.into_typed()
    }
}

impl std::fmt::Debug for CyberClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CyberClient")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
