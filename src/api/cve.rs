//! Website CVE scanning.

use super::{json_body, segment, HISTORY_FALLBACK, STATUS_FALLBACK};
use crate::client::CyberClient;
use crate::transport::RequestSpec;
use crate::types::{CveScanRequest, CveScanResult};
use crate::ErrorEnvelope;

pub fn scan_request(req: &CveScanRequest) -> RequestSpec {
    RequestSpec::post("/api/cve-scanner/scan")
        .with_json(json_body(req))
        .with_fallback("Erreur lors du scan CVE")
}

pub fn history_request(limit: u32) -> RequestSpec {
    RequestSpec::get("/api/cve-scanner/history")
        .with_query("limit", limit)
        .with_fallback(HISTORY_FALLBACK)
}

pub fn get_request(scan_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/api/cve-scanner/{}", segment(scan_id)))
        .with_fallback(STATUS_FALLBACK)
}

impl CyberClient {
    pub async fn scan_cve(&self, req: &CveScanRequest) -> Result<CveScanResult, ErrorEnvelope> {
        self.call(scan_request(req)).await
    }

    pub async fn cve_history(&self, limit: u32) -> Result<Vec<CveScanResult>, ErrorEnvelope> {
        self.call(history_request(limit)).await
    }

    pub async fn cve_scan(&self, scan_id: &str) -> Result<CveScanResult, ErrorEnvelope> {
        self.call(get_request(scan_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RequestBody;
    use serde_json::json;

    #[test]
    fn test_scan_body() {
        let spec = scan_request(&CveScanRequest::new("https://example.com").deep(true));
        assert_eq!(
            spec.body(),
            &RequestBody::Json(json!({"url": "https://example.com", "deep_scan": true}))
        );
    }

    #[test]
    fn test_get_path() {
        assert_eq!(get_request("cve_42").path(), "/api/cve-scanner/cve_42");
    }
}
