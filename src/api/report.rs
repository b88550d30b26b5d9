//! Report generation and retrieval.

use super::{json_body, segment, HISTORY_FALLBACK, STATUS_FALLBACK};
use crate::client::CyberClient;
use crate::transport::RequestSpec;
use crate::types::{ReportInfo, ReportRequest};
use crate::ErrorEnvelope;
use bytes::Bytes;

pub fn generate_request(req: &ReportRequest) -> RequestSpec {
    RequestSpec::post("/api/report-gen/generate")
        .with_json(json_body(req))
        .with_fallback("Erreur lors de la génération du rapport")
}

pub fn status_request(report_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/api/report-gen/status/{}", segment(report_id)))
        .with_fallback(STATUS_FALLBACK)
}

pub fn history_request(limit: u32) -> RequestSpec {
    RequestSpec::get("/api/report-gen/history")
        .with_query("limit", limit)
        .with_fallback(HISTORY_FALLBACK)
}

pub fn download_request(report_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/api/report-gen/download/{}", segment(report_id)))
        .expect_binary()
        .with_fallback("Erreur lors du téléchargement du rapport")
}

impl CyberClient {
    pub async fn generate_report(&self, req: &ReportRequest) -> Result<ReportInfo, ErrorEnvelope> {
        self.call(generate_request(req)).await
    }

    pub async fn report_status(&self, report_id: &str) -> Result<ReportInfo, ErrorEnvelope> {
        self.call(status_request(report_id)).await
    }

    pub async fn report_history(&self, limit: u32) -> Result<Vec<ReportInfo>, ErrorEnvelope> {
        self.call(history_request(limit)).await
    }

    /// Raw report bytes; persisting them is up to the caller.
    pub async fn download_report(&self, report_id: &str) -> Result<Bytes, ErrorEnvelope> {
        self.send(download_request(report_id)).await?.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{RequestBody, ResponseFormat};
    use serde_json::json;

    #[test]
    fn test_generate_body() {
        let req = ReportRequest::new("comprehensive", vec!["scan_1".into(), "ssh_2".into()])
            .with_format("pdf")
            .with_recommendations(true);
        let spec = generate_request(&req);
        assert_eq!(
            spec.body(),
            &RequestBody::Json(json!({
                "report_type": "comprehensive",
                "analysis_ids": ["scan_1", "ssh_2"],
                "format": "pdf",
                "include_recommendations": true
            }))
        );
    }

    #[test]
    fn test_download_expects_binary() {
        let spec = download_request("rep_9");
        assert_eq!(spec.path(), "/api/report-gen/download/rep_9");
        assert_eq!(spec.response_format(), ResponseFormat::Binary);
    }
}
