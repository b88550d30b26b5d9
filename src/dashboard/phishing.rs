use super::failure_outcome;
use crate::client::CyberClient;
use crate::lifecycle::{ActionSlot, Notifier, Outcome, OutcomeFormatter};
use crate::types::{PhishingDetectRequest, PhishingResult, ThreatCategory};
use crate::ErrorEnvelope;
use std::sync::Arc;

pub const FIELD_REQUIRED: &str = "Veuillez remplir au moins un champ";

struct PhishingNotices;

impl OutcomeFormatter<PhishingResult> for PhishingNotices {
    fn pending_message(&self) -> String {
        "🤖 Analyse IA en cours...".to_string()
    }

    fn success(&self, result: &PhishingResult) -> Outcome {
        let confidence = result.confidence_percent();
        match result.threat_category {
            ThreatCategory::Phishing => Outcome::error("🚨 PHISHING DÉTECTÉ !")
                .with_description(format!(
                    "Confiance: {}% • Ne cliquez sur rien !",
                    confidence
                ))
                .with_duration_ms(8_000),
            ThreatCategory::Suspicious => Outcome::warning("⚠️ Email suspect")
                .with_description(format!("Confiance: {}% • Soyez prudent", confidence)),
            _ => Outcome::success("✅ Email légitime")
                .with_description(format!("Confiance: {}%", confidence)),
        }
    }

    fn failure(&self, error: &ErrorEnvelope) -> Outcome {
        failure_outcome("❌ Échec de l'analyse", error)
    }
}

pub struct PhishingPage {
    client: CyberClient,
    analyze: ActionSlot<PhishingResult>,
}

impl PhishingPage {
    pub fn new(client: CyberClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            analyze: ActionSlot::new("phishing_analyze", notifier, PhishingNotices),
        }
    }

    pub fn slot(&self) -> &ActionSlot<PhishingResult> {
        &self.analyze
    }

    pub fn is_busy(&self) -> bool {
        self.analyze.is_running()
    }

    pub async fn analyze(
        &self,
        request: &PhishingDetectRequest,
    ) -> Result<PhishingResult, ErrorEnvelope> {
        if request.is_blank() {
            return Err(self.analyze.reject(FIELD_REQUIRED));
        }
        self.analyze.run(self.client.detect_phishing(request)).await
    }
}
