//! Mock HTTP server setup for integration tests

use cyber_ia_client::{ClientConfig, CyberClient, Session};
use mockito::{Server, ServerGuard};
use std::time::Duration;
use tokio::net::TcpListener;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server, sharing `session`.
    pub fn client(&self, session: Session) -> CyberClient {
        client_for(&self.base_url, session, Duration::from_secs(5))
    }
}

pub fn client_for(base_url: &str, session: Session, timeout: Duration) -> CyberClient {
    CyberClient::builder()
        .config(ClientConfig::default())
        .base_url_override(base_url)
        .timeout(timeout)
        .session(session)
        .build()
        .expect("client should build")
}

/// Accepts connections and never answers. Returns its base URL.
pub async fn stalled_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}", addr)
}

/// Base URL of a port nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}
