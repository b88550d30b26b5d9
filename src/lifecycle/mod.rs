//! Operation lifecycle and notification correlation.
//!
//! An [`ActionSlot`] tracks one user action (a page button): it validates,
//! opens a pending notice, awaits the backend call, and resolves that same
//! notice once. Slots are independent; two actions on one page use two slots.
//!
//! ```text
//! Idle ──begin──▶ Running ──settle(Ok)──▶ Succeeded
//!                    │
//!                    └────settle(Err)───▶ Failed
//! ```

mod notification;
mod operation;
mod slot;

pub use notification::{
    NotificationCenter, NotificationHandle, NotificationId, NotificationVariant, Notifier,
    Outcome, TracingNotifier,
};
pub use operation::{Operation, OperationStatus};
pub use slot::{ActionSlot, OutcomeFormatter, Ticket};
