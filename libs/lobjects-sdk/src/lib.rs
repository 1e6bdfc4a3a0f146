#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Entity clients for the Logo Objects REST API.
//!
//! One module per entity: its search-field table (the static
//! camelCase→UPPER_SNAKE mapping), a serde model with a flattened extra map
//! for the ERP long tail, and a client declared through the
//! `entity_client!` / `entity_operations!` macros from `lobjects-client`.
//!
//! The full generated endpoint inventory of the upstream service is not
//! re-derived here; each client carries the standard CRUD set, criteria
//! search helpers, and its known RPC-style sub-resource operations. Adding
//! an endpoint is one row in the corresponding operations table.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lobjects_client::{ClientConfig, HttpTransport};
//! use lobjects_query::QueryOptions;
//! use lobjects_sdk::FaRegistriesClient;
//!
//! let transport = Arc::new(HttpTransport::new(&ClientConfig {
//!     base_url: "http://localhost:32001/api/v1".to_owned(),
//! }));
//! let fa = FaRegistriesClient::new(transport);
//!
//! let page = fa.get_all(Some(&QueryOptions::new().limit(10).sort(["CODE"]))).await?;
//! let hits = fa.search_by_code("FA-2024").await?;
//! ```

pub mod arps;
pub mod distribution_templates;
pub mod fa_registries;
pub mod items;
pub mod sales_invoices;

pub use arps::{Arp, ArpField, ArpsClient};
pub use distribution_templates::{
    DistributionTemplate, DistributionTemplateField, DistributionTemplatesClient,
};
pub use fa_registries::{FaRegistriesClient, FaRegistry, FaRegistryField};
pub use items::{Item, ItemField, ItemsClient};
pub use sales_invoices::{SalesInvoice, SalesInvoiceField, SalesInvoicesClient};

// Convenience re-exports so downstream code needs only this crate.
pub use lobjects_client::{
    ApiResponse, ClientConfig, ClientError, HttpTransport, LogoClient, Method, Transport,
    TransportError,
};
pub use lobjects_query::{
    FieldOps, FieldValue, QueryOptions, Scalar, SearchCriteria, SearchField, SortDir, SortSpec,
};
