//! File malware analysis.

use super::{json_body, ANALYSIS_FALLBACK, HISTORY_FALLBACK};
use crate::client::CyberClient;
use crate::transport::{FileUpload, RequestSpec};
use crate::types::{MalwareAnalysisRequest, MalwareAnalysisResult};
use crate::ErrorEnvelope;

pub fn analyze_request(req: &MalwareAnalysisRequest) -> RequestSpec {
    RequestSpec::post("/api/malware-analysis/analyze")
        .with_json(json_body(req))
        .with_fallback(ANALYSIS_FALLBACK)
}

/// Multipart upload under the extended deadline.
pub fn scan_file_request(file: FileUpload) -> RequestSpec {
    RequestSpec::post("/api/malware-analysis/scan-file")
        .with_file(file)
        .with_fallback(ANALYSIS_FALLBACK)
}

pub fn history_request(limit: u32) -> RequestSpec {
    RequestSpec::get("/api/malware-analysis/history")
        .with_query("limit", limit)
        .with_fallback(HISTORY_FALLBACK)
}

impl CyberClient {
    pub async fn analyze_malware(
        &self,
        req: &MalwareAnalysisRequest,
    ) -> Result<MalwareAnalysisResult, ErrorEnvelope> {
        self.call(analyze_request(req)).await
    }

    pub async fn upload_and_scan(
        &self,
        file: FileUpload,
    ) -> Result<MalwareAnalysisResult, ErrorEnvelope> {
        self.call(scan_file_request(file)).await
    }

    pub async fn malware_history(
        &self,
        limit: u32,
    ) -> Result<Vec<MalwareAnalysisResult>, ErrorEnvelope> {
        self.call(history_request(limit)).await
    }
}
