use crate::client::CyberClient;
use crate::transport::RequestSpec;
use crate::types::HealthStatus;
use crate::ErrorEnvelope;

pub fn check_request() -> RequestSpec {
    RequestSpec::get("/health").with_fallback("Serveur indisponible")
}

impl CyberClient {
    pub async fn health_check(&self) -> Result<HealthStatus, ErrorEnvelope> {
        self.call(check_request()).await
    }
}
