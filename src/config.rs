//! Client configuration.
//!
//! Fixed at build time; defaults are env-overridable so deployments never need
//! code changes to point at another backend.

use crate::{Error, ErrorContext, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Checked in order; the first one set wins.
const BASE_URL_VARS: [&str; 2] = ["CYBER_IA_API_URL", "NEXT_PUBLIC_API_URL"];

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Deadline for standard calls.
    pub timeout: Duration,
    /// Deadline for file-upload calls.
    pub upload_timeout: Duration,
    pub pool_max_idle_per_host: usize,
    pub proxy_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
            pool_max_idle_per_host: 32,
            proxy_url: None,
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|s| s.trim().parse::<u64>().ok())
}

impl ClientConfig {
    /// Defaults overridden by environment variables:
    /// - `CYBER_IA_API_URL` (or `NEXT_PUBLIC_API_URL`)
    /// - `CYBER_IA_HTTP_TIMEOUT_SECS` (default 30)
    /// - `CYBER_IA_UPLOAD_TIMEOUT_SECS` (default 60)
    /// - `CYBER_IA_HTTP_POOL_MAX_IDLE_PER_HOST` (default 32)
    /// - `CYBER_IA_PROXY_URL`
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let (base_url, base_url_var) = match BASE_URL_VARS
            .iter()
            .find_map(|var| env::var(var).ok().map(|v| (v, *var)))
        {
            Some((url, var)) => (url, Some(var)),
            None => (defaults.base_url, None),
        };
        let cfg = Self {
            base_url,
            timeout: env_u64("CYBER_IA_HTTP_TIMEOUT_SECS")
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            upload_timeout: env_u64("CYBER_IA_UPLOAD_TIMEOUT_SECS")
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.upload_timeout),
            pool_max_idle_per_host: env_u64("CYBER_IA_HTTP_POOL_MAX_IDLE_PER_HOST")
                .map(|n| n as usize)
                .unwrap_or(defaults.pool_max_idle_per_host),
            proxy_url: env::var("CYBER_IA_PROXY_URL").ok().filter(|s| !s.is_empty()),
        };
        cfg.validate().map_err(|e| {
            let bad_url = e.context().and_then(|c| c.setting.as_deref()) == Some("base_url");
            match base_url_var {
                Some(var) if bad_url => e.with_env_var(var),
                _ => e,
            }
        })?;
        Ok(cfg)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    /// Checks the base URL and that both deadlines are non-zero.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base url: {}", e),
                ErrorContext::for_setting("base_url").with_value(self.base_url.as_str()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "base url must use http or https",
                ErrorContext::for_setting("base_url").with_value(self.base_url.as_str()),
            ));
        }
        if self.timeout.is_zero() || self.upload_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "timeouts must be greater than zero",
                ErrorContext::for_setting(if self.timeout.is_zero() {
                    "timeout"
                } else {
                    "upload_timeout"
                }),
            ));
        }
        Ok(())
    }

    /// Base URL without trailing slash, ready for `{base}{path}` joins.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
