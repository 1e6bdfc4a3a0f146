#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Query compilation for the Logo Objects REST API.
//!
//! The wrapped service accepts a small, OData-flavored query surface on its
//! list endpoints: pagination (`limit`/`offset`), projection (`fields`),
//! ordering (`sort`/`sortDirection`), and a boolean filter expression passed
//! as the `q` parameter. This crate owns the two compilers every entity
//! client delegates to:
//!
//! - [`QueryOptions::to_query_string`] — serializes a structured options
//!   value into the URL query string (without the leading `?`).
//! - [`SearchCriteria::compile`] — compiles a per-entity criteria mapping
//!   into a `q` filter expression, or `None` when no clause is produced.
//!
//! Both are pure, synchronous, and total over well-typed input; neither
//! performs I/O or holds shared state, so they are safe to call from any
//! number of concurrent tasks.
//!
//! # Example
//!
//! ```rust
//! use lobjects_query::QueryOptions;
//!
//! let qs = QueryOptions::new()
//!     .limit(10)
//!     .offset(0)
//!     .sort(["CODE"])
//!     .to_query_string();
//! assert_eq!(qs, "limit=10&offset=0&sort=CODE");
//! ```

pub mod criteria;
pub mod options;

pub use criteria::{FieldOps, FieldValue, Scalar, SearchCriteria, SearchField};
pub use options::{QueryOptions, SortSpec};

/// Sort direction for list endpoints.
///
/// Ascending is the service default; a `sortDirection` token is emitted only
/// for descending sorts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDir {
    #[default]
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}
