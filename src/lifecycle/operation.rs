use crate::ErrorEnvelope;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl OperationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, OperationStatus::Succeeded | OperationStatus::Failed)
    }
}

/// One tracked run of a user action.
///
/// Status only moves forward: Idle → Running → Succeeded | Failed. A new run
/// is a new `Operation`.
#[derive(Debug, Clone)]
pub struct Operation<T> {
    id: Uuid,
    generation: u64,
    status: OperationStatus,
    result: Option<T>,
    error: Option<ErrorEnvelope>,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
}

impl<T> Operation<T> {
    pub fn idle() -> Self {
        Self {
            id: Uuid::new_v4(),
            generation: 0,
            status: OperationStatus::Idle,
            result: None,
            error: None,
            started_at: None,
            ended_at: None,
        }
    }

    pub(crate) fn running(generation: u64) -> Self {
        Self {
            generation,
            status: OperationStatus::Running,
            started_at: Some(SystemTime::now()),
            ..Self::idle()
        }
    }

    /// Running → Succeeded. Returns false when not running.
    pub(crate) fn succeed(&mut self, result: T) -> bool {
        if self.status != OperationStatus::Running {
            return false;
        }
        self.result = Some(result);
        self.finish(OperationStatus::Succeeded);
        true
    }

    /// Running → Failed. Returns false when not running.
    pub(crate) fn fail(&mut self, error: ErrorEnvelope) -> bool {
        if self.status != OperationStatus::Running {
            return false;
        }
        self.error = Some(error);
        self.finish(OperationStatus::Failed);
        true
    }

    fn finish(&mut self, status: OperationStatus) {
        self.status = status;
        self.ended_at = Some(SystemTime::now());
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorEnvelope> {
        self.error.as_ref()
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }

    /// Wall-clock time between start and end, once ended.
    pub fn elapsed(&self) -> Option<Duration> {
        let (start, end) = (self.started_at?, self.ended_at?);
        end.duration_since(start).ok()
    }
}

impl<T> Default for Operation<T> {
    fn default() -> Self {
        Self::idle()
    }
}
