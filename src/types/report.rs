use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// `network_scan`, `malware`, `phishing` or `comprehensive`.
    pub report_type: String,
    pub analysis_ids: Vec<String>,
    /// `pdf`, `html` or `json`; the backend defaults to `pdf`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_recommendations: Option<bool>,
}

impl ReportRequest {
    pub fn new(report_type: impl Into<String>, analysis_ids: Vec<String>) -> Self {
        Self {
            report_type: report_type.into(),
            analysis_ids,
            format: None,
            include_recommendations: None,
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_recommendations(mut self, include: bool) -> Self {
        self.include_recommendations = Some(include);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInfo {
    #[serde(default)]
    pub report_id: String,
    #[serde(default)]
    pub report_url: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub generated_at: String,
    #[serde(default)]
    pub file_size_kb: u64,
}
