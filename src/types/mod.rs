//! Backend payload models.
//!
//! These mirror the JSON the analysis backend produces. The client treats the
//! analysis fields (threat level, confidence, score) as opaque facts; it only
//! reads them to summarise results for display.
//!
//! | Module | Domain |
//! |--------|--------|
//! | [`network`] | network scans and SSH log audits |
//! | [`malware`] | file malware analysis |
//! | [`phishing`] | email/URL phishing detection |
//! | [`report`] | report generation |
//! | [`cve`] | website CVE scanning |
//! | [`password`] | password strength analysis |
//! | [`health`] | backend health check |

pub mod cve;
pub mod health;
pub mod malware;
pub mod network;
pub mod password;
pub mod phishing;
pub mod report;

pub use cve::{CveInfo, CveScanRequest, CveScanResult, TechnologyInfo};
pub use health::HealthStatus;
pub use malware::{MalwareAnalysisRequest, MalwareAnalysisResult};
pub use network::{
    AttackPattern, Attacker, NetworkScanRequest, NetworkScanResult, ScanStatus, SshAuditResult,
    Vulnerability,
};
pub use password::{strength_label, PasswordAnalysis};
pub use phishing::{PhishingDetectRequest, PhishingResult, ThreatCategory};
pub use report::{ReportInfo, ReportRequest};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-computed severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Low => "low",
            ThreatLevel::Medium => "medium",
            ThreatLevel::High => "high",
            ThreatLevel::Critical => "critical",
            ThreatLevel::Unknown => "unknown",
        }
    }
}

impl Default for ThreatLevel {
    fn default() -> Self {
        ThreatLevel::Unknown
    }
}

/// Upper-case form used in notices ("HIGH").
impl fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Pagination for history endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub limit: u32,
    pub skip: u32,
}

impl HistoryQuery {
    pub fn limit(limit: u32) -> Self {
        Self { limit, skip: 0 }
    }

    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self { limit: 10, skip: 0 }
    }
}
