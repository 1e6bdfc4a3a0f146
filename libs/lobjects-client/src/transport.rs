//! The injected transport seam.
//!
//! The original client substituted its request method at the instance level
//! for testing; here the seam is an object-safe trait passed into the client
//! constructor. [`HttpTransport`] is the default implementation: one request
//! per call, JSON in and out, no authentication, retry, or pooling policy of
//! its own.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// HTTP verb of a Logo Objects endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque transport failure.
///
/// Carries a message and the underlying source error when one exists. The
/// client layers never match on it; it surfaces unchanged to the caller of a
/// generated method.
#[derive(Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Collaborator that performs the actual HTTP call.
///
/// `path` is the full request path including the query string (no host);
/// `body` is the JSON payload for verbs that carry one.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError>;
}

/// Connection settings for [`HttpTransport`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:32001/api/v1`. A trailing slash
    /// is tolerated; request paths always start with `/`.
    pub base_url: String,
}

/// Default [`Transport`] over reqwest.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Build on an existing reqwest client (shared pools, custom TLS).
    #[must_use]
    pub fn with_http_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, TransportError> {
        let url = format!("{}{path}", self.base_url);

        let mut request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Put => self.http.put(&url),
            Method::Patch => self.http.patch(&url),
            Method::Delete => self.http.delete(&url),
        };
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::with_source(format!("{method} {url} failed"), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(format!(
                "{method} {url} returned status {status}"
            )));
        }
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::with_source("invalid JSON response body", e))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::new(&ClientConfig {
            base_url: "http://localhost:32001/api/v1/".to_owned(),
        });
        assert_eq!(transport.base_url, "http://localhost:32001/api/v1");
    }

    #[test]
    fn transport_error_keeps_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        let err = TransportError::with_source("request failed", inner);
        assert_eq!(err.to_string(), "transport error: request failed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
