#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Transport boundary and base client for the Logo Objects REST API.
//!
//! Every generated entity client is a thin layer over two pieces defined
//! here:
//!
//! - [`Transport`] — the injected collaborator that performs the actual HTTP
//!   call. The core never retries, transforms, or reinterprets transport
//!   failures; they propagate opaquely as [`TransportError`]. Tests
//!   substitute a fake implementation instead of touching the network
//!   (see the sdk crate's integration tests).
//! - [`LogoClient`] — owns an `Arc<dyn Transport>` and provides the shared
//!   `request` path: query-string assembly is the caller's job (via
//!   `lobjects-query`), this layer only appends it, dispatches, and
//!   deserializes the response body.
//!
//! The repetitive per-entity surface (CRUD plus the long tail of RPC-style
//! sub-resource endpoints) is declared through the [`entity_client!`] and
//! [`entity_operations!`] macros rather than transcribed by hand, so each
//! endpoint row preserves the exact URL formatting of the wrapped service.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lobjects_client::{ClientConfig, HttpTransport, Transport};
//!
//! let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&ClientConfig {
//!     base_url: "http://localhost:32001/api/v1".to_owned(),
//! }));
//! let fa = lobjects_sdk::FaRegistriesClient::new(transport);
//! let page = fa.get_all(None).await?;
//! ```

pub mod client;
pub mod macros;
pub mod transport;

pub use client::{ApiResponse, ClientError, LogoClient, append_query};
pub use transport::{ClientConfig, HttpTransport, Method, Transport, TransportError};

// Re-exported so the entity macros can name query types through `$crate`.
pub use lobjects_query as query;
