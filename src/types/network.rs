use super::ThreatLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkScanRequest {
    /// IP address or domain.
    pub target: String,
    /// `quick`, `full` or `stealth`; the backend defaults to `quick`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_type: Option<String>,
    /// Port list such as `80,443,8080`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<String>,
}

impl NetworkScanRequest {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scan_type: None,
            ports: None,
        }
    }

    pub fn with_scan_type(mut self, scan_type: impl Into<String>) -> Self {
        self.scan_type = Some(scan_type.into());
        self
    }

    pub fn with_ports(mut self, ports: impl Into<String>) -> Self {
        self.ports = Some(ports.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl Default for ScanStatus {
    fn default() -> Self {
        ScanStatus::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkScanResult {
    #[serde(default)]
    pub scan_id: String,
    #[serde(default)]
    pub status: ScanStatus,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub open_ports: Vec<u16>,
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(default)]
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacker {
    pub ip: String,
    #[serde(default)]
    pub attempts: u64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub abuse_score: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub is_whitelisted: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPattern {
    #[serde(rename = "type", default)]
    pub pattern_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SshAuditResult {
    #[serde(default)]
    pub analysis_id: String,
    #[serde(default)]
    pub total_attacks: u64,
    #[serde(default)]
    pub unique_attackers: u64,
    #[serde(default)]
    pub top_attackers: Vec<Attacker>,
    #[serde(default)]
    pub attack_patterns: Vec<AttackPattern>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub threat_level: ThreatLevel,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scan_request_omits_unset_fields() {
        let body = serde_json::to_value(NetworkScanRequest::new("10.0.0.1")).unwrap();
        assert_eq!(body, json!({"target": "10.0.0.1"}));

        let body = serde_json::to_value(
            NetworkScanRequest::new("10.0.0.1")
                .with_scan_type("full")
                .with_ports("22,80"),
        )
        .unwrap();
        assert_eq!(
            body,
            json!({"target": "10.0.0.1", "scan_type": "full", "ports": "22,80"})
        );
    }

    #[test]
    fn test_ssh_audit_parses_backend_shape() {
        let result: SshAuditResult = serde_json::from_value(json!({
            "analysis_id": "ssh_1",
            "total_attacks": 42,
            "unique_attackers": 2,
            "top_attackers": [
                {"ip": "1.2.3.4", "attempts": 40, "percentage": 95.24, "abuse_score": 87, "country": "CN"},
                {"ip": "5.6.7.8", "attempts": 2, "percentage": 4.76, "abuse_score": null}
            ],
            "attack_patterns": [{"type": "brute_force", "description": "x", "severity": "high"}],
            "recommendations": ["Installer fail2ban"],
            "threat_level": "high",
            "timestamp": "2025-11-27T10:00:00"
        }))
        .unwrap();
        assert_eq!(result.total_attacks, 42);
        assert_eq!(result.top_attackers[0].abuse_score, Some(87));
        assert_eq!(result.top_attackers[1].abuse_score, None);
        assert_eq!(result.attack_patterns[0].pattern_type, "brute_force");
        assert_eq!(result.threat_level, ThreatLevel::High);
    }
}
