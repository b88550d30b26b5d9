use super::failure_outcome;
use crate::client::CyberClient;
use crate::lifecycle::{ActionSlot, Notifier, Outcome, OutcomeFormatter};
use crate::types::{ReportInfo, ReportRequest};
use crate::ErrorEnvelope;
use std::sync::Arc;

pub const ANALYSIS_IDS_REQUIRED: &str = "Au moins un ID d'analyse est requis";

struct ReportNotices;

impl OutcomeFormatter<ReportInfo> for ReportNotices {
    fn pending_message(&self) -> String {
        "📄 Génération du rapport en cours...".to_string()
    }

    fn success(&self, result: &ReportInfo) -> Outcome {
        Outcome::success("✅ Rapport généré").with_description(format!(
            "Format: {} • {} Ko",
            result.format.to_uppercase(),
            result.file_size_kb
        ))
    }

    fn failure(&self, error: &ErrorEnvelope) -> Outcome {
        failure_outcome("❌ Échec de la génération", error)
    }
}

pub struct ReportPage {
    client: CyberClient,
    generate: ActionSlot<ReportInfo>,
}

impl ReportPage {
    pub fn new(client: CyberClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            generate: ActionSlot::new("report_generate", notifier, ReportNotices),
        }
    }

    pub fn slot(&self) -> &ActionSlot<ReportInfo> {
        &self.generate
    }

    pub fn is_busy(&self) -> bool {
        self.generate.is_running()
    }

    pub async fn generate(&self, request: &ReportRequest) -> Result<ReportInfo, ErrorEnvelope> {
        if request.analysis_ids.iter().all(|id| id.trim().is_empty()) {
            return Err(self.generate.reject(ANALYSIS_IDS_REQUIRED));
        }
        self.generate.run(self.client.generate_report(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_summary() {
        let info: ReportInfo = serde_json::from_value(serde_json::json!({
            "report_id": "rep_1",
            "format": "pdf",
            "file_size_kb": 245
        }))
        .unwrap();
        assert_eq!(
            ReportNotices.success(&info).description.as_deref(),
            Some("Format: PDF • 245 Ko")
        );
    }
}
