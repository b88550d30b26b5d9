//! Immutable description of one outbound call.

use bytes::Bytes;
use std::borrow::Cow;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// How the body travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Json,
    Multipart,
}

/// Which deadline applies to a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTimeout {
    /// The configured standard deadline (30 s by default).
    Standard,
    /// The configured file-upload deadline (60 s by default).
    Extended,
    Custom(Duration),
}

/// What the caller expects back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Binary,
}

/// Raw file content sent as a multipart `file` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Bytes,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// Reads a file from disk, naming the upload after its last path component.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        Ok(Self::new(file_name, content))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    None,
    Json(serde_json::Value),
    File(FileUpload),
}

const DEFAULT_FALLBACK: &str = "Erreur lors de la requête";

/// One call: method, path, ordered query, body, deadline and expected payload.
///
/// Built once through the consuming `with_*` methods and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    timeout: RequestTimeout,
    response: ResponseFormat,
    fallback: Cow<'static, str>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };
        Self {
            method,
            path,
            query: Vec::new(),
            body: RequestBody::None,
            timeout: RequestTimeout::Standard,
            response: ResponseFormat::Json,
            fallback: Cow::Borrowed(DEFAULT_FALLBACK),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    /// Multipart upload; switches the deadline to [`RequestTimeout::Extended`].
    pub fn with_file(mut self, file: FileUpload) -> Self {
        self.body = RequestBody::File(file);
        self.timeout = RequestTimeout::Extended;
        self
    }

    pub fn with_timeout(mut self, timeout: RequestTimeout) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn expect_binary(mut self) -> Self {
        self.response = ResponseFormat::Binary;
        self
    }

    /// Message shown when a failure carries no server detail.
    pub fn with_fallback(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.fallback = message.into();
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    pub fn timeout(&self) -> RequestTimeout {
        self.timeout
    }

    pub fn response_format(&self) -> ResponseFormat {
        self.response
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback
    }

    pub fn encoding(&self) -> ContentEncoding {
        match self.body {
            RequestBody::File(_) => ContentEncoding::Multipart,
            _ => ContentEncoding::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_path_is_rooted() {
        assert_eq!(RequestSpec::get("health").path(), "/health");
        assert_eq!(RequestSpec::get("/health").path(), "/health");
    }

    #[test]
    fn test_query_keeps_insertion_order() {
        let spec = RequestSpec::get("/api/network-scan/history")
            .with_query("limit", 10)
            .with_query("skip", 0);
        assert_eq!(
            spec.query(),
            &[
                ("limit".to_string(), "10".to_string()),
                ("skip".to_string(), "0".to_string())
            ]
        );
    }

    #[test]
    fn test_file_body_is_multipart_with_extended_timeout() {
        let spec = RequestSpec::post("/upload").with_file(FileUpload::new("a.bin", vec![1u8, 2]));
        assert_eq!(spec.encoding(), ContentEncoding::Multipart);
        assert_eq!(spec.timeout(), RequestTimeout::Extended);
    }

    #[test]
    fn test_json_defaults() {
        let spec = RequestSpec::post("/x").with_json(json!({"a": 1}));
        assert_eq!(spec.encoding(), ContentEncoding::Json);
        assert_eq!(spec.timeout(), RequestTimeout::Standard);
        assert_eq!(spec.response_format(), ResponseFormat::Json);
        assert_eq!(spec.fallback_message(), "Erreur lors de la requête");
    }
}
