use super::failure_outcome;
use crate::client::CyberClient;
use crate::lifecycle::{ActionSlot, Notifier, Outcome, OutcomeFormatter};
use crate::types::{NetworkScanResult, SshAuditResult};
use crate::{ErrorEnvelope, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

pub const TARGET_REQUIRED: &str = "Veuillez entrer une cible (IP ou domaine)";
pub const SSH_LOGS_REQUIRED: &str = "Veuillez coller le contenu de vos logs SSH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkScanAction {
    QuickScan,
    SshAudit,
}

struct QuickScanNotices;

impl OutcomeFormatter<NetworkScanResult> for QuickScanNotices {
    fn pending_message(&self) -> String {
        "🔍 Scan réseau en cours...".to_string()
    }

    fn success(&self, result: &NetworkScanResult) -> Outcome {
        Outcome::success("✅ Scan terminé avec succès").with_description(format!(
            "Niveau de menace: {} • {} port(s) ouvert(s)",
            result.threat_level,
            result.open_ports.len()
        ))
    }

    fn failure(&self, error: &ErrorEnvelope) -> Outcome {
        failure_outcome("❌ Échec du scan", error)
    }
}

struct SshAuditNotices;

impl OutcomeFormatter<SshAuditResult> for SshAuditNotices {
    fn pending_message(&self) -> String {
        "🔍 Analyse des logs SSH en cours...".to_string()
    }

    fn success(&self, result: &SshAuditResult) -> Outcome {
        Outcome::success("✅ Analyse terminée").with_description(format!(
            "{} tentatives détectées • Niveau: {}",
            result.total_attacks, result.threat_level
        ))
    }

    fn failure(&self, error: &ErrorEnvelope) -> Outcome {
        failure_outcome("❌ Échec de l'analyse", error)
    }
}

/// Port scans and SSH log audits.
pub struct NetworkScanPage {
    client: CyberClient,
    notifier: Arc<dyn Notifier>,
    quick_scan: ActionSlot<NetworkScanResult>,
    ssh_audit: ActionSlot<SshAuditResult>,
    ssh_logs: Mutex<String>,
}

impl NetworkScanPage {
    pub fn new(client: CyberClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            quick_scan: ActionSlot::new("quick_scan", notifier.clone(), QuickScanNotices),
            ssh_audit: ActionSlot::new("ssh_audit", notifier.clone(), SshAuditNotices),
            client,
            notifier,
            ssh_logs: Mutex::new(String::new()),
        }
    }

    pub fn quick_scan_slot(&self) -> &ActionSlot<NetworkScanResult> {
        &self.quick_scan
    }

    pub fn ssh_audit_slot(&self) -> &ActionSlot<SshAuditResult> {
        &self.ssh_audit
    }

    pub fn is_busy(&self, action: NetworkScanAction) -> bool {
        match action {
            NetworkScanAction::QuickScan => self.quick_scan.is_running(),
            NetworkScanAction::SshAudit => self.ssh_audit.is_running(),
        }
    }

    pub async fn quick_scan(&self, target: &str) -> std::result::Result<NetworkScanResult, ErrorEnvelope> {
        let target = target.trim();
        if target.is_empty() {
            return Err(self.quick_scan.reject(TARGET_REQUIRED));
        }
        self.quick_scan.run(self.client.quick_scan(target)).await
    }

    /// Loads a log file's content. Does not touch the page; feed the result
    /// to [`set_ssh_logs`](Self::set_ssh_logs).
    pub async fn read_log_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let content = String::from_utf8_lossy(&content).into_owned();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!(file = name.as_str(), bytes = content.len(), "log file loaded");
        self.notifier
            .notify(Outcome::success(format!("📄 Fichier chargé: {}", name)));
        Ok(content)
    }

    pub fn set_ssh_logs(&self, content: impl Into<String>) {
        *self.ssh_logs.lock().unwrap_or_else(PoisonError::into_inner) = content.into();
    }

    pub fn ssh_logs(&self) -> String {
        self.ssh_logs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Audits the logs currently held by the page.
    pub async fn ssh_audit(&self) -> std::result::Result<SshAuditResult, ErrorEnvelope> {
        let logs = self.ssh_logs();
        if logs.trim().is_empty() {
            return Err(self.ssh_audit.reject(SSH_LOGS_REQUIRED));
        }
        self.ssh_audit.run(self.client.analyze_ssh_logs(&logs)).await
    }
}
