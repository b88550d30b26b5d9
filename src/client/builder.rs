use crate::client::core::CyberClient;
use crate::config::ClientConfig;
use crate::session::{Session, TokenStore};
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`CyberClient`].
///
/// Configuration comes from [`ClientConfig::from_env`] unless an explicit
/// config is given; individual knobs override either.
pub struct CyberClientBuilder {
    config: Option<ClientConfig>,
    base_url_override: Option<String>,
    timeout: Option<Duration>,
    upload_timeout: Option<Duration>,
    session: Option<Session>,
    token_store: Option<Arc<dyn TokenStore>>,
}

impl CyberClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            base_url_override: None,
            timeout: None,
            upload_timeout: None,
            session: None,
            token_store: None,
        }
    }

    /// Use `config` instead of reading the environment.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the base URL (mock servers, staging backends).
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = Some(timeout);
        self
    }

    /// Share an existing session (e.g. one the login flow already filled).
    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Restore the session from `store` at build time. Ignored when
    /// [`session`](Self::session) is set.
    pub fn token_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.token_store = Some(store);
        self
    }

    pub fn build(self) -> Result<CyberClient> {
        let mut config = match self.config {
            Some(cfg) => cfg,
            None => ClientConfig::from_env()?,
        };
        if let Some(base_url) = self.base_url_override {
            config.base_url = base_url;
        }
        if let Some(t) = self.timeout {
            config.timeout = t;
        }
        if let Some(t) = self.upload_timeout {
            config.upload_timeout = t;
        }

        let session = match (self.session, self.token_store) {
            (Some(session), _) => session,
            (None, Some(store)) => Session::restore(store)?,
            (None, None) => Session::new(),
        };

        let transport: Arc<dyn Transport> =
            Arc::new(HttpTransport::new(config, session.clone())?);
        Ok(CyberClient::from_transport(transport, session))
    }
}

impl Default for CyberClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
