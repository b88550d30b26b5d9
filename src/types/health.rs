use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Module name to state (`active`, ...).
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Modules not reporting `active`.
    pub fn inactive_modules(&self) -> Vec<&str> {
        self.modules
            .iter()
            .filter(|(_, state)| state.as_str() != "active")
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
