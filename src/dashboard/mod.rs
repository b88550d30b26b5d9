//! Dashboard pages.
//!
//! Each page owns one [`ActionSlot`](crate::lifecycle::ActionSlot) per
//! action, validates its inputs locally and formats backend results into
//! notices.
//!
//! | Page | Slots |
//! |------|-------|
//! | [`NetworkScanPage`] | quick scan, SSH audit |
//! | [`PasswordPage`] | analyze |
//! | [`PhishingPage`] | analyze |
//! | [`ReportPage`] | generate |

mod network_scan;
mod password;
mod phishing;
mod report;

pub use network_scan::{NetworkScanAction, NetworkScanPage};
pub use password::PasswordPage;
pub use phishing::PhishingPage;
pub use report::ReportPage;

use crate::lifecycle::Outcome;
use crate::ErrorEnvelope;

/// Failure notice: fixed title, classified message as description.
pub(crate) fn failure_outcome(title: &str, error: &ErrorEnvelope) -> Outcome {
    Outcome::error(title).with_description(error.message())
}
