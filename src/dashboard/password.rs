use super::failure_outcome;
use crate::client::CyberClient;
use crate::lifecycle::{ActionSlot, Notifier, Outcome, OutcomeFormatter};
use crate::types::PasswordAnalysis;
use crate::ErrorEnvelope;
use std::sync::Arc;

pub const PASSWORD_REQUIRED: &str = "Veuillez entrer un mot de passe";

struct PasswordNotices;

impl OutcomeFormatter<PasswordAnalysis> for PasswordNotices {
    fn pending_message(&self) -> String {
        "🔍 Analyse en cours...".to_string()
    }

    fn success(&self, result: &PasswordAnalysis) -> Outcome {
        Outcome::success("✅ Analyse terminée")
            .with_description(format!("Force: {}", result.strength_label()))
            .with_duration_ms(3_000)
    }

    fn failure(&self, error: &ErrorEnvelope) -> Outcome {
        failure_outcome("❌ Échec de l'analyse", error)
    }
}

pub struct PasswordPage {
    client: CyberClient,
    analyze: ActionSlot<PasswordAnalysis>,
}

impl PasswordPage {
    pub fn new(client: CyberClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            analyze: ActionSlot::new("password_analyze", notifier, PasswordNotices),
        }
    }

    pub fn slot(&self) -> &ActionSlot<PasswordAnalysis> {
        &self.analyze
    }

    pub fn is_busy(&self) -> bool {
        self.analyze.is_running()
    }

    /// The password is sent as typed; only blank input is rejected.
    pub async fn analyze(&self, password: &str) -> Result<PasswordAnalysis, ErrorEnvelope> {
        if password.trim().is_empty() {
            return Err(self.analyze.reject(PASSWORD_REQUIRED));
        }
        self.analyze.run(self.client.analyze_password(password)).await
    }
}
