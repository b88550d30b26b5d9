use super::ThreatLevel;
use serde::{Deserialize, Serialize};

/// Email to analyse. Blank fields are dropped before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishingDetectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl PhishingDetectRequest {
    /// Builds a request from raw form fields; blank strings become absent.
    pub fn from_fields(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: non_blank(sender),
            subject: non_blank(subject),
            body: non_blank(body),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = non_blank(url);
        self
    }

    /// True when no field carries content.
    pub fn is_blank(&self) -> bool {
        [&self.sender, &self.subject, &self.body, &self.url]
            .iter()
            .all(|f| f.as_deref().map_or(true, |s| s.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreatCategory {
    Safe,
    Suspicious,
    Phishing,
    #[serde(other)]
    Unknown,
}

impl Default for ThreatCategory {
    fn default() -> Self {
        ThreatCategory::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhishingResult {
    #[serde(default)]
    pub detection_id: String,
    #[serde(default)]
    pub is_phishing: bool,
    /// Probability in `0.0..=1.0`.
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub threat_category: ThreatCategory,
    #[serde(default)]
    pub indicators: Vec<String>,
    #[serde(default)]
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub ai_model_used: String,
    #[serde(default)]
    pub timestamp: String,
}

impl PhishingResult {
    /// Confidence as a rounded percentage.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(PhishingDetectRequest::default().is_blank());
        assert!(PhishingDetectRequest::from_fields("", "  ", "\n").is_blank());
        assert!(!PhishingDetectRequest::from_fields("", "Urgent", "").is_blank());
        assert!(!PhishingDetectRequest::default()
            .with_url("https://paypal-secure.com")
            .is_blank());
    }

    #[test]
    fn test_blank_fields_are_not_sent() {
        let req = PhishingDetectRequest::from_fields("support@paypal-secure.com", "", "Cliquez ici");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"sender": "support@paypal-secure.com", "body": "Cliquez ici"})
        );
    }

    #[test]
    fn test_confidence_percent() {
        let result: PhishingResult = serde_json::from_value(serde_json::json!({
            "is_phishing": true,
            "confidence": 0.876,
            "threat_category": "phishing"
        }))
        .unwrap();
        assert_eq!(result.confidence_percent(), 88);
        assert_eq!(result.threat_category, ThreatCategory::Phishing);
    }
}
