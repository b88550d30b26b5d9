//! Network scans and SSH log audits.

use super::{json_body, segment, ANALYSIS_FALLBACK, HISTORY_FALLBACK, STATUS_FALLBACK};
use crate::client::CyberClient;
use crate::transport::RequestSpec;
use crate::types::{HistoryQuery, NetworkScanRequest, NetworkScanResult, SshAuditResult};
use crate::ErrorEnvelope;

const SCAN_FALLBACK: &str = "Erreur lors du scan réseau";

pub fn start_request(req: &NetworkScanRequest) -> RequestSpec {
    RequestSpec::post("/api/network-scan/start")
        .with_json(json_body(req))
        .with_fallback(SCAN_FALLBACK)
}

pub fn status_request(scan_id: &str) -> RequestSpec {
    RequestSpec::get(format!("/api/network-scan/status/{}", segment(scan_id)))
        .with_fallback(STATUS_FALLBACK)
}

pub fn history_request(query: HistoryQuery) -> RequestSpec {
    RequestSpec::get("/api/network-scan/history")
        .with_query("limit", query.limit)
        .with_query("skip", query.skip)
        .with_fallback(HISTORY_FALLBACK)
}

pub fn quick_scan_request(target: &str) -> RequestSpec {
    RequestSpec::post("/api/network-scan/quick-scan")
        .with_query("target", target)
        .with_fallback(SCAN_FALLBACK)
}

pub fn ssh_audit_request(log_content: &str) -> RequestSpec {
    RequestSpec::post("/api/network-scan/ssh-audit")
        .with_query("log_content", log_content)
        .with_fallback(ANALYSIS_FALLBACK)
}

impl CyberClient {
    pub async fn start_network_scan(
        &self,
        req: &NetworkScanRequest,
    ) -> Result<NetworkScanResult, ErrorEnvelope> {
        self.call(start_request(req)).await
    }

    pub async fn scan_status(&self, scan_id: &str) -> Result<NetworkScanResult, ErrorEnvelope> {
        self.call(status_request(scan_id)).await
    }

    pub async fn scan_history(
        &self,
        query: HistoryQuery,
    ) -> Result<Vec<NetworkScanResult>, ErrorEnvelope> {
        self.call(history_request(query)).await
    }

    pub async fn quick_scan(&self, target: &str) -> Result<NetworkScanResult, ErrorEnvelope> {
        self.call(quick_scan_request(target)).await
    }

    pub async fn analyze_ssh_logs(&self, log_content: &str) -> Result<SshAuditResult, ErrorEnvelope> {
        self.call(ssh_audit_request(log_content)).await
    }
}
