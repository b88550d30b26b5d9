//! Password strength analysis.

use super::ANALYSIS_FALLBACK;
use crate::client::CyberClient;
use crate::transport::RequestSpec;
use crate::types::PasswordAnalysis;
use crate::ErrorEnvelope;
use serde_json::json;

pub fn analyze_request(password: &str) -> RequestSpec {
    RequestSpec::post("/api/password-analyzer/analyze")
        .with_json(json!({ "password": password }))
        .with_fallback(ANALYSIS_FALLBACK)
}

/// The body is a bare JSON array of passwords.
pub fn batch_request(passwords: &[String]) -> RequestSpec {
    RequestSpec::post("/api/password-analyzer/batch-analyze")
        .with_json(json!(passwords))
        .with_fallback(ANALYSIS_FALLBACK)
}

impl CyberClient {
    pub async fn analyze_password(&self, password: &str) -> Result<PasswordAnalysis, ErrorEnvelope> {
        self.call(analyze_request(password)).await
    }

    /// Batch result is passed through untyped.
    pub async fn batch_analyze_passwords(
        &self,
        passwords: &[String],
    ) -> Result<serde_json::Value, ErrorEnvelope> {
        self.call(batch_request(passwords)).await
    }
}
