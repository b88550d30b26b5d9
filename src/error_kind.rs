//! Failure taxonomy shared by every backend call.
//!
//! Each kind carries a stable code so the UI layer and logs can match on it
//! without probing optional fields.
//!
//! | Code  | Kind               | Produced when                                  |
//! |-------|--------------------|------------------------------------------------|
//! | E1001 | Validation         | local precondition failed, or a non-401 4xx     |
//! | E1002 | Unauthorized       | HTTP 401 (the session token is cleared)         |
//! | E3001 | ServerError        | HTTP 5xx                                        |
//! | E3003 | Timeout            | deadline exceeded, or HTTP 408                  |
//! | E3004 | NetworkUnavailable | no response (refused, DNS, reset)               |
//! | E9999 | Unknown            | anything else                                   |
//!
//! ```rust
//! use cyber_ia_client::error_kind::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(503);
//! assert_eq!(kind, ErrorKind::ServerError);
//! assert_eq!(kind.code(), "E3001");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// E1001: local input precondition failed or the server rejected the request
    Validation,
    /// E1002: missing, invalid or expired bearer credential
    Unauthorized,
    /// E3003: request deadline exceeded
    Timeout,
    /// E3004: no response was received
    NetworkUnavailable,
    /// E3001: backend failed while handling the request
    ServerError,
    /// E9999: error could not be classified
    Unknown,
}

impl ErrorKind {
    /// Returns the canonical code string (e.g., `"E1001"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "E1001",
            Self::Unauthorized => "E1002",
            Self::ServerError => "E3001",
            Self::Timeout => "E3003",
            Self::NetworkUnavailable => "E3004",
            Self::Unknown => "E9999",
        }
    }

    /// Returns the standard name (e.g., `"network_unavailable"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Unauthorized => "unauthorized",
            Self::Timeout => "timeout",
            Self::NetworkUnavailable => "network_unavailable",
            Self::ServerError => "server_error",
            Self::Unknown => "unknown",
        }
    }

    /// Whether no response reached the client for this kind of failure.
    #[inline]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout | Self::NetworkUnavailable)
    }

    /// Maps a non-success HTTP status to its kind.
    ///
    /// Statuses outside 4xx/5xx (e.g. an unfollowed redirect) are `Unknown`.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            408 => Self::Timeout,
            400..=499 => Self::Validation,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorKind::from_http_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_http_status(408), ErrorKind::Timeout);
        assert_eq!(ErrorKind::from_http_status(400), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_http_status(404), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_http_status(422), ErrorKind::Validation);
        assert_eq!(ErrorKind::from_http_status(500), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_http_status(503), ErrorKind::ServerError);
        assert_eq!(ErrorKind::from_http_status(302), ErrorKind::Unknown);
    }

    #[test]
    fn test_codes_are_unique() {
        let all = [
            ErrorKind::Validation,
            ErrorKind::Unauthorized,
            ErrorKind::Timeout,
            ErrorKind::NetworkUnavailable,
            ErrorKind::ServerError,
            ErrorKind::Unknown,
        ];
        let mut codes: Vec<_> = all.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_transport_kinds() {
        assert!(ErrorKind::Timeout.is_transport());
        assert!(ErrorKind::NetworkUnavailable.is_transport());
        assert!(!ErrorKind::ServerError.is_transport());
    }
}
