use super::ThreatLevel;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalwareAnalysisRequest {
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
    /// `quick`, `standard` or `deep`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_depth: Option<String>,
}

impl MalwareAnalysisRequest {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_hash: None,
            analysis_depth: None,
        }
    }

    /// Request for a local file, hashed (SHA-256, lowercase hex) without uploading it.
    pub fn from_file(file_name: impl Into<String>, content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self {
            file_name: file_name.into(),
            file_hash: Some(format!("{:x}", digest)),
            analysis_depth: None,
        }
    }

    pub fn with_depth(mut self, depth: impl Into<String>) -> Self {
        self.analysis_depth = Some(depth.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MalwareAnalysisResult {
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub is_malicious: bool,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub threat_type: Option<String>,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default)]
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub timestamp: String,
}
