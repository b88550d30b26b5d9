use crate::error_kind::ErrorKind;
use thiserror::Error;

/// What a construction failure was about: a config setting (and the env var
/// it came from) or a token-store entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Config setting that failed validation (e.g. `base_url`)
    pub setting: Option<String>,
    /// Environment variable the setting was read from
    pub env_var: Option<String>,
    /// Offending value as given
    pub value: Option<String>,
    /// Token store backend (`memory`, `keyring`)
    pub store: Option<&'static str>,
    /// Token store key (e.g. `auth_token`)
    pub store_key: Option<String>,
}

impl ErrorContext {
    pub fn for_setting(setting: impl Into<String>) -> Self {
        Self {
            setting: Some(setting.into()),
            ..Self::default()
        }
    }

    pub fn for_store(store: &'static str, key: impl Into<String>) -> Self {
        Self {
            store: Some(store),
            store_key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Errors raised while building or configuring the client.
///
/// Failures of backend calls are never reported through this type; they are
/// classified into an [`ErrorEnvelope`] instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Token store error: {message}{}", format_context(.context))]
    TokenStore {
        message: String,
        context: ErrorContext,
    },

    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// " [base_url from CYBER_IA_API_URL = \"ftp://x\"]" or " [keyring:auth_token]"
fn format_context(ctx: &ErrorContext) -> String {
    let mut out = String::new();
    if let Some(setting) = &ctx.setting {
        out.push_str(setting);
        if let Some(var) = &ctx.env_var {
            out.push_str(&format!(" from {}", var));
        }
        if let Some(value) = &ctx.value {
            out.push_str(&format!(" = {:?}", value));
        }
    }
    if let Some(store) = ctx.store {
        if !out.is_empty() {
            out.push_str(", ");
        }
        out.push_str(store);
        if let Some(key) = &ctx.store_key {
            out.push_str(&format!(":{}", key));
        }
    }
    if out.is_empty() {
        out
    } else {
        format!(" [{}]", out)
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn token_store_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::TokenStore {
            message: msg.into(),
            context,
        }
    }

    /// Records the env var a misconfigured setting came from.
    pub fn with_env_var(mut self, name: &str) -> Self {
        if let Error::Configuration { context, .. } = &mut self {
            context.env_var = Some(name.to_string());
        }
        self
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::TokenStore { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

/// Normalized, classified failure of a backend call.
///
/// Built exactly once per failed call by
/// [`classify`](crate::client::error_classification::classify) and never
/// mutated afterwards, so the fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct ErrorEnvelope {
    http_status: Option<u16>,
    kind: ErrorKind,
    message: String,
    raw: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    pub(crate) fn new(
        http_status: Option<u16>,
        kind: ErrorKind,
        message: String,
        raw: Option<serde_json::Value>,
    ) -> Self {
        Self {
            http_status,
            kind,
            message,
            raw,
        }
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message meant for display. Never contains raw transport diagnostics.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Original failure payload, kept for diagnostics only.
    pub fn raw(&self) -> Option<&serde_json::Value> {
        self.raw.as_ref()
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}
