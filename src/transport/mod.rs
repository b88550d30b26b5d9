//! HTTP client layer.
//!
//! [`Transport`] is the seam the façade talks to; [`HttpTransport`] is the
//! reqwest-backed implementation. Every failure leaving this layer is an
//! [`ErrorEnvelope`], never a raw transport error.

mod http;
mod request;

pub use http::HttpTransport;
pub use request::{
    ContentEncoding, FileUpload, Method, RequestBody, RequestSpec, RequestTimeout, ResponseFormat,
};

use crate::client::error_classification::{classify, RawFailure};
use crate::ErrorEnvelope;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Parsed response payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Binary(Bytes),
    Empty,
}

impl Payload {
    /// Deserializes a JSON payload into `T`.
    ///
    /// A shape mismatch is classified like any other failure.
    pub fn into_typed<T: DeserializeOwned>(self) -> Result<T, ErrorEnvelope> {
        let value = match self {
            Payload::Json(v) => v,
            Payload::Empty => serde_json::Value::Null,
            Payload::Binary(_) => {
                return Err(classify(RawFailure::Decode {
                    status: None,
                    diagnostic: "expected JSON payload, got binary".to_string(),
                    fallback: DECODE_FALLBACK.to_string(),
                }))
            }
        };
        serde_json::from_value(value).map_err(|e| {
            classify(RawFailure::Decode {
                status: None,
                diagnostic: e.to_string(),
                fallback: DECODE_FALLBACK.to_string(),
            })
        })
    }

    pub fn into_bytes(self) -> Result<Bytes, ErrorEnvelope> {
        match self {
            Payload::Binary(b) => Ok(b),
            Payload::Empty => Ok(Bytes::new()),
            Payload::Json(v) => serde_json::to_vec(&v).map(Bytes::from).map_err(|e| {
                classify(RawFailure::Decode {
                    status: None,
                    diagnostic: e.to_string(),
                    fallback: DECODE_FALLBACK.to_string(),
                })
            }),
        }
    }
}

const DECODE_FALLBACK: &str = "Réponse du serveur illisible";

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, spec: RequestSpec) -> Result<Payload, ErrorEnvelope>;
}
