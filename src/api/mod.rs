//! Endpoint façade: one typed call per backend capability.
//!
//! Every capability is split in two: a pure function mapping typed arguments
//! to a [`RequestSpec`](crate::transport::RequestSpec), and a `CyberClient`
//! method that sends it and returns the parsed payload unchanged. No retries,
//! no caching, no business rules.
//!
//! | Domain | Method | Path |
//! |--------|--------|------|
//! | network-scan | POST | `/api/network-scan/start` |
//! | network-scan | GET | `/api/network-scan/status/{scanId}` |
//! | network-scan | GET | `/api/network-scan/history?limit&skip` |
//! | network-scan | POST | `/api/network-scan/quick-scan?target` |
//! | network-scan | POST | `/api/network-scan/ssh-audit?log_content` |
//! | malware | POST | `/api/malware-analysis/analyze` |
//! | malware | POST | `/api/malware-analysis/scan-file` (multipart, extended timeout) |
//! | malware | GET | `/api/malware-analysis/history?limit` |
//! | phishing | POST | `/api/phishing-detect/analyze` |
//! | phishing | POST | `/api/phishing-detect/analyze-url?url` |
//! | phishing | GET | `/api/phishing-detect/history?limit` |
//! | report | POST | `/api/report-gen/generate` |
//! | report | GET | `/api/report-gen/status/{reportId}` |
//! | report | GET | `/api/report-gen/history?limit` |
//! | report | GET | `/api/report-gen/download/{reportId}` (binary) |
//! | cve | POST | `/api/cve-scanner/scan` |
//! | cve | GET | `/api/cve-scanner/history?limit` |
//! | cve | GET | `/api/cve-scanner/{scanId}` |
//! | password | POST | `/api/password-analyzer/analyze` |
//! | password | POST | `/api/password-analyzer/batch-analyze` |
//! | health | GET | `/health` |

pub mod cve;
pub mod health;
pub mod malware;
pub mod network_scan;
pub mod password;
pub mod phishing;
pub mod report;

use serde::Serialize;

pub(crate) const HISTORY_FALLBACK: &str = "Erreur lors de la récupération de l'historique";
pub(crate) const STATUS_FALLBACK: &str = "Erreur lors de la récupération du statut";
pub(crate) const ANALYSIS_FALLBACK: &str = "Erreur lors de l'analyse";

// Request models are plain structs with string keys: infallible.
pub(crate) fn json_body<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

/// Percent-encodes an identifier used as a single path segment.
///
/// Path encoding, not form encoding: a space becomes `%20`, `/` and `%` are
/// escaped, `+` stays literal.
pub(crate) fn segment(id: &str) -> String {
    let Ok(mut url) = url::Url::parse("http://segment/") else {
        return String::new();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push(id);
    }
    url.path().trim_start_matches('/').to_string()
}
