use serde::{Deserialize, Serialize};

const STRENGTH_LABELS: [&str; 5] = ["Très Faible", "Faible", "Moyen", "Fort", "Très Fort"];

/// Display label for a 0..=4 strength score. Out-of-range scores read as 0.
pub fn strength_label(score: u8) -> &'static str {
    STRENGTH_LABELS
        .get(score as usize)
        .copied()
        .unwrap_or(STRENGTH_LABELS[0])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    /// 0 (weakest) to 4 (strongest).
    pub score: u8,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub crack_time_seconds: f64,
    #[serde(default)]
    pub crack_time_display: String,
    #[serde(default)]
    pub entropy: f64,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub feedback: serde_json::Value,
    #[serde(default)]
    pub timestamp: String,
}

impl PasswordAnalysis {
    pub fn strength_label(&self) -> &'static str {
        strength_label(self.score)
    }

    /// Score as a share of the maximum, for progress bars.
    pub fn percent(&self) -> u32 {
        (u32::from(self.score.min(4)) * 100) / 4
    }
}
