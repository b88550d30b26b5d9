use super::notification::{NotificationId, Notifier, Outcome};
use super::operation::{Operation, OperationStatus};
use crate::client::{cancelled, precondition_failed};
use crate::ErrorEnvelope;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Turns results and failures of one action into notices.
pub trait OutcomeFormatter<T>: Send + Sync {
    /// Title of the pending notice.
    fn pending_message(&self) -> String;

    fn success(&self, result: &T) -> Outcome;

    fn failure(&self, error: &ErrorEnvelope) -> Outcome {
        Outcome::error(error.message())
    }
}

struct SlotState<T> {
    generation: u64,
    current: Operation<T>,
}

/// Proof that a run was started; settling consumes it, so each opened
/// notice is resolved exactly once.
#[derive(Debug)]
#[must_use]
pub struct Ticket {
    generation: u64,
    notification: NotificationId,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn notification(&self) -> NotificationId {
        self.notification
    }
}

/// Lifecycle of one user action on one page.
///
/// Every start bumps a generation counter. A run that settles after a newer
/// run started still resolves its own notice but leaves the displayed
/// operation alone.
pub struct ActionSlot<T> {
    name: &'static str,
    notifier: Arc<dyn Notifier>,
    formatter: Box<dyn OutcomeFormatter<T>>,
    state: Mutex<SlotState<T>>,
}

impl<T: Clone> ActionSlot<T> {
    pub fn new(
        name: &'static str,
        notifier: Arc<dyn Notifier>,
        formatter: impl OutcomeFormatter<T> + 'static,
    ) -> Self {
        Self {
            name,
            notifier,
            formatter: Box::new(formatter),
            state: Mutex::new(SlotState {
                generation: 0,
                current: Operation::idle(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshot of the displayed operation.
    pub fn current(&self) -> Operation<T> {
        self.state().current.clone()
    }

    pub fn status(&self) -> OperationStatus {
        self.state().current.status()
    }

    pub fn is_running(&self) -> bool {
        self.status() == OperationStatus::Running
    }

    /// Local input check failed: posts an error notice and returns a
    /// validation envelope. No operation is created.
    pub fn reject(&self, message: &str) -> ErrorEnvelope {
        let error = precondition_failed(message);
        debug!(slot = self.name, reason = message, "action rejected before dispatch");
        self.notifier.notify(Outcome::error(message));
        error
    }

    /// Starts a new operation, replacing the displayed one.
    pub fn begin(&self) -> Ticket {
        let notification = self.notifier.open(&self.formatter.pending_message());
        let mut st = self.state();
        st.generation += 1;
        st.current = Operation::running(st.generation);
        debug!(slot = self.name, generation = st.generation, "operation started");
        Ticket {
            generation: st.generation,
            notification,
        }
    }

    /// Resolves the ticket's notice and, if no newer run started, records the
    /// result. Returns whether the result was applied.
    pub fn settle(&self, ticket: Ticket, outcome: &Result<T, ErrorEnvelope>) -> bool {
        let notice = match outcome {
            Ok(result) => self.formatter.success(result),
            Err(error) => self.formatter.failure(error),
        };
        self.notifier.resolve(ticket.notification, notice);

        let mut st = self.state();
        if st.generation != ticket.generation {
            debug!(
                slot = self.name,
                generation = ticket.generation,
                latest = st.generation,
                "discarding stale result"
            );
            return false;
        }
        let applied = match outcome {
            Ok(result) => st.current.succeed(result.clone()),
            Err(error) => st.current.fail(error.clone()),
        };
        info!(
            slot = self.name,
            generation = ticket.generation,
            succeeded = outcome.is_ok(),
            error_kind = outcome.as_ref().err().map(|e| e.kind().name()).unwrap_or(""),
            "operation settled"
        );
        applied
    }

    /// Begin, await, settle.
    ///
    /// Dropping the returned future before it completes settles the run as
    /// cancelled, so the slot never stays `Running` and the notice is closed.
    pub async fn run<F>(&self, call: F) -> Result<T, ErrorEnvelope>
    where
        F: Future<Output = Result<T, ErrorEnvelope>>,
    {
        let mut guard = RunGuard {
            slot: self,
            ticket: Some(self.begin()),
        };
        let outcome = call.await;
        if let Some(ticket) = guard.ticket.take() {
            self.settle(ticket, &outcome);
        }
        outcome
    }
}

/// Holds the ticket of an in-flight `run` until it settles.
struct RunGuard<'a, T: Clone> {
    slot: &'a ActionSlot<T>,
    ticket: Option<Ticket>,
}

impl<T: Clone> Drop for RunGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            warn!(
                slot = self.slot.name,
                generation = ticket.generation,
                "run dropped before settling"
            );
            self.slot.settle(ticket, &Err(cancelled()));
        }
    }
}

impl<T> std::fmt::Debug for ActionSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionSlot")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_kind::ErrorKind;
    use crate::lifecycle::notification::{NotificationCenter, NotificationVariant};

    struct Echo;

    impl OutcomeFormatter<u32> for Echo {
        fn pending_message(&self) -> String {
            "En cours...".to_string()
        }

        fn success(&self, result: &u32) -> Outcome {
            Outcome::success(format!("valeur {}", result))
        }
    }

    fn slot() -> (Arc<NotificationCenter>, ActionSlot<u32>) {
        let center = Arc::new(NotificationCenter::new());
        let slot = ActionSlot::new("echo", center.clone(), Echo);
        (center, slot)
    }

    #[tokio::test]
    async fn test_run_success() {
        let (center, slot) = slot();
        assert_eq!(slot.status(), OperationStatus::Idle);

        let out = slot.run(async { Ok(3) }).await;
        assert_eq!(out.unwrap(), 3);
        assert_eq!(slot.status(), OperationStatus::Succeeded);
        assert_eq!(slot.current().result(), Some(&3));
        assert_eq!((center.opened_count(), center.resolved_count()), (1, 1));
        assert_eq!(center.last().unwrap().title, "valeur 3");
    }

    #[tokio::test]
    async fn test_run_failure_uses_envelope_message() {
        let (center, slot) = slot();
        let out = slot
            .run(async { Err(precondition_failed("boom")) })
            .await;
        assert!(out.is_err());
        assert_eq!(slot.status(), OperationStatus::Failed);
        let notice = center.last().unwrap();
        assert_eq!(notice.variant, NotificationVariant::Error);
        assert_eq!(notice.title, "boom");
    }

    #[test]
    fn test_reject_creates_no_operation() {
        let (center, slot) = slot();
        let err = slot.reject("Veuillez entrer une cible");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(slot.status(), OperationStatus::Idle);
        assert_eq!(center.opened_count(), 0);
        assert_eq!(center.posted_count(), 1);
    }

    #[test]
    fn test_new_run_clears_previous_result() {
        let (_center, slot) = slot();
        let t = slot.begin();
        assert!(slot.settle(t, &Ok(1)));
        assert_eq!(slot.current().result(), Some(&1));

        let _t2 = slot.begin();
        assert!(slot.is_running());
        assert!(slot.current().result().is_none());
    }

    #[test]
    fn test_stale_settlement_is_discarded_but_resolved() {
        let (center, slot) = slot();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.settle(second, &Ok(2)));
        assert!(!slot.settle(first, &Ok(1)));

        assert_eq!(slot.current().result(), Some(&2));
        assert_eq!(slot.current().generation(), 2);
        assert_eq!(center.pending_count(), 0);
        assert_eq!((center.opened_count(), center.resolved_count()), (2, 2));
    }

    #[tokio::test]
    async fn test_dropped_run_settles_as_cancelled() {
        let (center, slot) = slot();
        let out = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            slot.run(async {
                tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                Ok(1)
            }),
        )
        .await;
        assert!(out.is_err());

        assert_eq!(slot.status(), OperationStatus::Failed);
        assert!(!slot.is_running());
        let op = slot.current();
        assert_eq!(op.error().map(|e| e.kind()), Some(ErrorKind::Unknown));
        assert_eq!(
            op.error().map(|e| e.message()),
            Some(crate::client::error_classification::CANCELLED_MESSAGE)
        );

        assert_eq!(center.pending_count(), 0);
        assert_eq!((center.opened_count(), center.resolved_count()), (1, 1));
        assert_eq!(center.last().unwrap().variant, NotificationVariant::Error);

        // The slot accepts a new run afterwards.
        assert_eq!(slot.run(async { Ok(7) }).await.unwrap(), 7);
        assert_eq!(slot.status(), OperationStatus::Succeeded);
    }
}
