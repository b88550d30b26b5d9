//! Error classification: the single place an [`ErrorEnvelope`] is built.
//!
//! Rules, checked in order:
//! 1. a local precondition failed before any network call → `Validation`
//! 2. a response arrived with a `detail` field → kind from the status, message = detail
//! 3. no response arrived → `Timeout` or `NetworkUnavailable`, generic message
//! 4. anything else → kind from the status when there is one, else `Unknown`,
//!    with the caller's fallback message

use crate::error_kind::ErrorKind;
use crate::ErrorEnvelope;
use serde_json::{json, Value};

pub const TIMEOUT_MESSAGE: &str = "Le serveur n'a pas répondu à temps, réessayez plus tard";
pub const NETWORK_UNAVAILABLE_MESSAGE: &str =
    "Impossible de joindre le serveur, vérifiez votre connexion";
pub const CANCELLED_MESSAGE: &str = "Opération annulée";

/// A failure as observed, before classification.
#[derive(Debug, Clone)]
pub enum RawFailure {
    /// Local input validation failed; nothing was sent.
    Precondition { message: String },
    /// The server answered with a non-success status.
    Response {
        status: u16,
        body: String,
        fallback: String,
    },
    /// No response: refused, DNS failure, reset, or deadline elapsed.
    NoResponse {
        timed_out: bool,
        diagnostic: String,
    },
    /// A response arrived but its payload could not be read.
    Decode {
        status: Option<u16>,
        diagnostic: String,
        fallback: String,
    },
    /// The caller stopped waiting before the call settled.
    Cancelled,
}

pub fn classify(raw: RawFailure) -> ErrorEnvelope {
    match raw {
        RawFailure::Precondition { message } => {
            ErrorEnvelope::new(None, ErrorKind::Validation, message, None)
        }
        RawFailure::Response {
            status,
            body,
            fallback,
        } => {
            let parsed: Option<Value> = serde_json::from_str(&body).ok();
            let kind = ErrorKind::from_http_status(status);
            let message = parsed
                .as_ref()
                .and_then(detail_message)
                .unwrap_or(fallback);
            let raw = parsed.or_else(|| {
                if body.is_empty() {
                    None
                } else {
                    Some(Value::String(body))
                }
            });
            ErrorEnvelope::new(Some(status), kind, message, raw)
        }
        RawFailure::NoResponse {
            timed_out,
            diagnostic,
        } => {
            let (kind, message) = if timed_out {
                (ErrorKind::Timeout, TIMEOUT_MESSAGE)
            } else {
                (ErrorKind::NetworkUnavailable, NETWORK_UNAVAILABLE_MESSAGE)
            };
            ErrorEnvelope::new(
                None,
                kind,
                message.to_string(),
                Some(json!({ "transport": diagnostic, "timed_out": timed_out })),
            )
        }
        RawFailure::Decode {
            status,
            diagnostic,
            fallback,
        } => ErrorEnvelope::new(
            status,
            ErrorKind::Unknown,
            fallback,
            Some(json!({ "decode": diagnostic })),
        ),
        RawFailure::Cancelled => ErrorEnvelope::new(
            None,
            ErrorKind::Unknown,
            CANCELLED_MESSAGE.to_string(),
            None,
        ),
    }
}

/// Shorthand for rule 1.
pub fn precondition_failed(message: impl Into<String>) -> ErrorEnvelope {
    classify(RawFailure::Precondition {
        message: message.into(),
    })
}

/// Shorthand for an abandoned call (rule 4).
pub fn cancelled() -> ErrorEnvelope {
    classify(RawFailure::Cancelled)
}

/// Human-readable `detail` of a failure body.
///
/// Accepts a plain string or a list of `{ "msg": ... }` items; blank details
/// count as absent.
fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|i| i.get("msg").and_then(|m| m.as_str()))
                .filter(|m| !m.trim().is_empty())
                .collect();
            (!msgs.is_empty()).then(|| msgs.join("; "))
        }
        _ => None,
    }
}
