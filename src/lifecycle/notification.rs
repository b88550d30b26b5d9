//! Notification correlation: one notice per operation, opened pending and
//! mutated in place exactly once.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Pending,
    Success,
    Warning,
    Error,
}

impl NotificationVariant {
    /// How long a resolved notice stays on screen. Pending notices stay until
    /// resolved.
    pub fn default_duration_ms(&self) -> Option<u64> {
        match self {
            NotificationVariant::Pending => None,
            NotificationVariant::Success => Some(5_000),
            NotificationVariant::Warning | NotificationVariant::Error => Some(6_000),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NotificationVariant::Pending => "pending",
            NotificationVariant::Success => "success",
            NotificationVariant::Warning => "warning",
            NotificationVariant::Error => "error",
        }
    }
}

/// Final state a notice is resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: Option<String>,
    /// Overrides the variant's default duration.
    pub duration_ms: Option<u64>,
}

impl Outcome {
    fn with_variant(variant: NotificationVariant, title: impl Into<String>) -> Self {
        Self {
            variant,
            title: title.into(),
            description: None,
            duration_ms: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::with_variant(NotificationVariant::Success, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::with_variant(NotificationVariant::Warning, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::with_variant(NotificationVariant::Error, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn display_duration_ms(&self) -> Option<u64> {
        self.duration_ms.or_else(|| self.variant.default_duration_ms())
    }
}

/// One on-screen status indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationHandle {
    pub id: NotificationId,
    pub variant: NotificationVariant,
    pub title: String,
    pub description: Option<String>,
    pub display_duration_ms: Option<u64>,
}

impl NotificationHandle {
    fn pending(id: NotificationId, message: &str) -> Self {
        Self {
            id,
            variant: NotificationVariant::Pending,
            title: message.to_string(),
            description: None,
            display_duration_ms: None,
        }
    }

    fn apply(&mut self, outcome: Outcome) {
        self.display_duration_ms = outcome.display_duration_ms();
        self.variant = outcome.variant;
        self.title = outcome.title;
        self.description = outcome.description;
    }

    pub fn is_pending(&self) -> bool {
        self.variant == NotificationVariant::Pending
    }
}

/// Sink for operation notices.
///
/// `resolve` is called exactly once per `open`; `notify` posts an
/// already-final notice that has no pending phase.
pub trait Notifier: Send + Sync {
    fn open(&self, message: &str) -> NotificationId;
    fn resolve(&self, id: NotificationId, outcome: Outcome);
    fn notify(&self, outcome: Outcome) -> NotificationId;
}

/// Logs notices instead of displaying them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn open(&self, message: &str) -> NotificationId {
        let id = NotificationId::new();
        info!(notification_id = %id, title = message, "notice opened");
        id
    }

    fn resolve(&self, id: NotificationId, outcome: Outcome) {
        info!(
            notification_id = %id,
            variant = outcome.variant.name(),
            title = outcome.title.as_str(),
            description = outcome.description.as_deref().unwrap_or(""),
            "notice resolved"
        );
    }

    fn notify(&self, outcome: Outcome) -> NotificationId {
        let id = NotificationId::new();
        info!(
            notification_id = %id,
            variant = outcome.variant.name(),
            title = outcome.title.as_str(),
            "notice posted"
        );
        id
    }
}

#[derive(Debug, Default)]
struct CenterState {
    handles: Vec<NotificationHandle>,
    opened: usize,
    resolved: usize,
    posted: usize,
}

/// In-memory notice list, mutated in place.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    state: Mutex<CenterState>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, CenterState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn handles(&self) -> Vec<NotificationHandle> {
        self.state().handles.clone()
    }

    pub fn get(&self, id: NotificationId) -> Option<NotificationHandle> {
        self.state().handles.iter().find(|h| h.id == id).cloned()
    }

    pub fn last(&self) -> Option<NotificationHandle> {
        self.state().handles.last().cloned()
    }

    pub fn pending_count(&self) -> usize {
        self.state().handles.iter().filter(|h| h.is_pending()).count()
    }

    pub fn opened_count(&self) -> usize {
        self.state().opened
    }

    pub fn resolved_count(&self) -> usize {
        self.state().resolved
    }

    pub fn posted_count(&self) -> usize {
        self.state().posted
    }
}

impl Notifier for NotificationCenter {
    fn open(&self, message: &str) -> NotificationId {
        let id = NotificationId::new();
        let mut st = self.state();
        st.handles.push(NotificationHandle::pending(id, message));
        st.opened += 1;
        id
    }

    fn resolve(&self, id: NotificationId, outcome: Outcome) {
        let mut st = self.state();
        match st.handles.iter_mut().find(|h| h.id == id) {
            Some(handle) if handle.is_pending() => {
                handle.apply(outcome);
                st.resolved += 1;
            }
            Some(_) => warn!(notification_id = %id, "notice already resolved"),
            None => warn!(notification_id = %id, "resolve for unknown notice"),
        }
    }

    fn notify(&self, outcome: Outcome) -> NotificationId {
        let id = NotificationId::new();
        let mut handle = NotificationHandle::pending(id, "");
        handle.apply(outcome);
        let mut st = self.state();
        st.handles.push(handle);
        st.posted += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_mutates_same_handle() {
        let center = NotificationCenter::new();
        let id = center.open("Scan en cours...");
        assert!(center.get(id).unwrap().is_pending());

        center.resolve(id, Outcome::success("Scan terminé").with_description("ok"));
        let handle = center.get(id).unwrap();
        assert_eq!(handle.variant, NotificationVariant::Success);
        assert_eq!(handle.title, "Scan terminé");
        assert_eq!(handle.display_duration_ms, Some(5_000));
        assert_eq!(center.handles().len(), 1);
        assert_eq!((center.opened_count(), center.resolved_count()), (1, 1));
    }

    #[test]
    fn test_second_resolve_is_ignored() {
        let center = NotificationCenter::new();
        let id = center.open("...");
        center.resolve(id, Outcome::error("a"));
        center.resolve(id, Outcome::success("b"));
        assert_eq!(center.get(id).unwrap().title, "a");
        assert_eq!(center.resolved_count(), 1);
    }

    #[test]
    fn test_durations() {
        assert!(
            NotificationVariant::Error.default_duration_ms()
                > NotificationVariant::Success.default_duration_ms()
        );
        assert_eq!(
            Outcome::warning("x").display_duration_ms(),
            Some(6_000)
        );
        assert_eq!(
            Outcome::error("x").with_duration_ms(8_000).display_duration_ms(),
            Some(8_000)
        );
    }

    #[test]
    fn test_notify_is_final() {
        let center = NotificationCenter::new();
        center.notify(Outcome::error("Veuillez entrer un mot de passe"));
        assert_eq!(center.pending_count(), 0);
        assert_eq!(center.posted_count(), 1);
        assert_eq!(center.opened_count(), 0);
    }

    #[test]
    fn test_handle_serializes_with_id() {
        let center = NotificationCenter::new();
        let id = center.open("Analyse en cours...");
        center.resolve(id, Outcome::warning("⚠️ Email suspect"));
        let handle = center.get(id).unwrap();

        let value = serde_json::to_value(&handle).unwrap();
        assert_eq!(value["id"], serde_json::json!(id.to_string()));
        assert_eq!(value["variant"], "warning");
        assert_eq!(value["display_duration_ms"], 6_000);

        let back: NotificationHandle = serde_json::from_value(value).unwrap();
        assert_eq!(back, handle);
    }
}
