use super::{Method, Payload, RequestBody, RequestSpec, RequestTimeout, ResponseFormat, Transport};
use crate::client::error_classification::{classify, RawFailure};
use crate::config::ClientConfig;
use crate::session::Session;
use crate::{Error, ErrorEnvelope, Result};
use async_trait::async_trait;
use reqwest::{Proxy, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// reqwest-backed [`Transport`].
///
/// Reads the [`Session`] before every call and clears it when the backend
/// answers 401. That is the only shared state it touches.
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
    session: Session,
}

impl HttpTransport {
    pub fn new(config: ClientConfig, session: Session) -> Result<Self> {
        config.validate()?;

        // Deadlines are applied per request, see `deadline`.
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy url: {}", e),
                    crate::ErrorContext::for_setting("proxy_url").with_value(proxy_url.as_str()),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn deadline(&self, timeout: RequestTimeout) -> Duration {
        match timeout {
            RequestTimeout::Standard => self.config.timeout,
            RequestTimeout::Extended => self.config.upload_timeout,
            RequestTimeout::Custom(d) => d,
        }
    }

    fn no_response(e: &reqwest::Error, started: Instant, deadline: Duration) -> ErrorEnvelope {
        classify(RawFailure::NoResponse {
            timed_out: e.is_timeout() || started.elapsed() >= deadline,
            diagnostic: e.to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, spec: RequestSpec) -> std::result::Result<Payload, ErrorEnvelope> {
        let url = format!("{}{}", self.config.normalized_base_url(), spec.path());
        let deadline = self.deadline(spec.timeout());
        let request_id = Uuid::new_v4().to_string();

        let mut request = match spec.method() {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        }
        .timeout(deadline)
        .header("x-request-id", &request_id);

        if !spec.query().is_empty() {
            request = request.query(spec.query());
        }

        request = match spec.body() {
            RequestBody::None => request,
            RequestBody::Json(body) => request.json(body),
            RequestBody::File(file) => {
                let part = reqwest::multipart::Part::bytes(file.content.to_vec())
                    .file_name(file.file_name.clone());
                request.multipart(reqwest::multipart::Form::new().part("file", part))
            }
        };

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        debug!(
            method = spec.method().as_str(),
            path = spec.path(),
            request_id = request_id.as_str(),
            "dispatching request"
        );

        let started = Instant::now();
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                let envelope = Self::no_response(&e, started, deadline);
                info!(
                    error_kind = envelope.kind().name(),
                    path = spec.path(),
                    duration_ms = started.elapsed().as_millis(),
                    "request failed without response"
                );
                return Err(envelope);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                warn!(path = spec.path(), "unauthorized response, clearing session");
                self.session.clear();
            }
            let body = resp.text().await.unwrap_or_default();
            let envelope = classify(RawFailure::Response {
                status: status.as_u16(),
                body,
                fallback: spec.fallback_message().to_string(),
            });
            info!(
                http_status = status.as_u16(),
                error_kind = envelope.kind().name(),
                path = spec.path(),
                request_id = request_id.as_str(),
                duration_ms = started.elapsed().as_millis(),
                "request failed"
            );
            return Err(envelope);
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Self::no_response(&e, started, deadline))?;

        debug!(
            http_status = status.as_u16(),
            path = spec.path(),
            bytes = bytes.len(),
            duration_ms = started.elapsed().as_millis(),
            "request completed"
        );

        match spec.response_format() {
            ResponseFormat::Binary => Ok(Payload::Binary(bytes)),
            ResponseFormat::Json if bytes.is_empty() => Ok(Payload::Empty),
            ResponseFormat::Json => serde_json::from_slice(&bytes)
                .map(Payload::Json)
                .map_err(|e| {
                    classify(RawFailure::Decode {
                        status: Some(status.as_u16()),
                        diagnostic: e.to_string(),
                        fallback: spec.fallback_message().to_string(),
                    })
                }),
        }
    }
}
