use super::ThreatLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CveScanRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_scan: Option<bool>,
}

impl CveScanRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            deep_scan: None,
        }
    }

    pub fn deep(mut self, deep: bool) -> Self {
        self.deep_scan = Some(deep);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyInfo {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveInfo {
    pub cve_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: ThreatLevel,
    #[serde(default)]
    pub cvss_score: f64,
    #[serde(default)]
    pub affected_versions: Vec<String>,
    #[serde(default)]
    pub patch_available: bool,
    #[serde(default)]
    pub published_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CveScanResult {
    #[serde(default)]
    pub scan_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub technologies: Vec<TechnologyInfo>,
    #[serde(default)]
    pub vulnerabilities: Vec<CveInfo>,
    #[serde(default)]
    pub overall_risk: ThreatLevel,
    #[serde(default)]
    pub total_cves: u32,
    #[serde(default)]
    pub timestamp: String,
}
