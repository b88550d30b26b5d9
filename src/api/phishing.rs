//! Phishing detection.

use super::{json_body, ANALYSIS_FALLBACK, HISTORY_FALLBACK};
use crate::client::CyberClient;
use crate::transport::RequestSpec;
use crate::types::{PhishingDetectRequest, PhishingResult};
use crate::ErrorEnvelope;

pub fn analyze_request(req: &PhishingDetectRequest) -> RequestSpec {
    RequestSpec::post("/api/phishing-detect/analyze")
        .with_json(json_body(req))
        .with_fallback(ANALYSIS_FALLBACK)
}

pub fn analyze_url_request(url: &str) -> RequestSpec {
    RequestSpec::post("/api/phishing-detect/analyze-url")
        .with_query("url", url)
        .with_fallback(ANALYSIS_FALLBACK)
}

pub fn history_request(limit: u32) -> RequestSpec {
    RequestSpec::get("/api/phishing-detect/history")
        .with_query("limit", limit)
        .with_fallback(HISTORY_FALLBACK)
}

impl CyberClient {
    pub async fn detect_phishing(
        &self,
        req: &PhishingDetectRequest,
    ) -> Result<PhishingResult, ErrorEnvelope> {
        self.call(analyze_request(req)).await
    }

    pub async fn analyze_url(&self, url: &str) -> Result<PhishingResult, ErrorEnvelope> {
        self.call(analyze_url_request(url)).await
    }

    pub async fn phishing_history(&self, limit: u32) -> Result<Vec<PhishingResult>, ErrorEnvelope> {
        self.call(history_request(limit)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RequestBody;
    use serde_json::json;

    #[test]
    fn test_analyze_sends_only_present_fields() {
        let req = PhishingDetectRequest::from_fields("", "Urgent: compte suspendu", "");
        let spec = analyze_request(&req);
        assert_eq!(spec.path(), "/api/phishing-detect/analyze");
        assert_eq!(
            spec.body(),
            &RequestBody::Json(json!({"subject": "Urgent: compte suspendu"}))
        );
    }

    #[test]
    fn test_analyze_url_query() {
        let spec = analyze_url_request("https://paypal-secure.com/verify");
        assert_eq!(
            spec.query(),
            &[("url".to_string(), "https://paypal-secure.com/verify".to_string())]
        );
    }
}
