//! Shared request plumbing for entity clients.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

use crate::transport::{Method, Transport, TransportError};

/// Error surfaced by client methods.
///
/// Transport failures pass through unchanged; the only failure this layer
/// adds is JSON (de)serialization of request and response bodies.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("decoding response failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// List-response envelope of the wrapped service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: None,
        }
    }
}

/// Base client shared by every generated entity client.
///
/// Holds the injected transport and performs the one request shape the whole
/// surface needs: dispatch a verb against a path, deserialize the JSON body.
#[derive(Clone)]
pub struct LogoClient {
    transport: Arc<dyn Transport>,
}

impl LogoClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Dispatch a request and deserialize the response body into `T`.
    ///
    /// # Errors
    ///
    /// Propagates the transport's failure unchanged, or
    /// [`ClientError::Decode`] when the body does not deserialize into `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        tracing::debug!(method = %method, path, "logo objects request");
        let raw = self.transport.execute(method, path, body).await?;
        Ok(serde_json::from_value(raw)?)
    }

    /// Dispatch a request and discard the response body (DELETE and other
    /// endpoints whose payload carries no information).
    ///
    /// # Errors
    ///
    /// Propagates the transport's failure unchanged.
    pub async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ClientError> {
        tracing::debug!(method = %method, path, "logo objects request");
        self.transport.execute(method, path, body).await?;
        Ok(())
    }
}

impl std::fmt::Debug for LogoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogoClient").finish_non_exhaustive()
    }
}

/// Append a query string to a path, inserting `?` only when non-empty.
#[must_use]
pub fn append_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    #[test]
    fn append_query_skips_separator_for_empty_query() {
        assert_eq!(append_query("/FARegistries", ""), "/FARegistries");
        assert_eq!(
            append_query("/FARegistries", "limit=10"),
            "/FARegistries?limit=10"
        );
    }

    #[test]
    fn api_response_deserializes_wire_names() {
        let response: ApiResponse<Value> =
            serde_json::from_value(json!({"items": [{"CODE": "A"}], "totalCount": 7})).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.total_count, Some(7));
    }

    #[test]
    fn api_response_tolerates_missing_fields() {
        let response: ApiResponse<Value> = serde_json::from_value(json!({})).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.total_count, None);
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn execute(
            &self,
            _method: Method,
            _path: &str,
            _body: Option<Value>,
        ) -> Result<Value, TransportError> {
            Err(TransportError::new("boom"))
        }
    }

    #[tokio::test]
    async fn transport_failures_pass_through_unchanged() {
        let client = LogoClient::new(Arc::new(FailingTransport));
        let err = client
            .request::<Value>(Method::Get, "/items", None)
            .await
            .unwrap_err();
        match err {
            ClientError::Transport(inner) => {
                assert_eq!(inner.to_string(), "transport error: boom");
            }
            ClientError::Decode(_) => panic!("expected a transport error"),
        }
    }
}
