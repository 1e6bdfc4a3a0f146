//! List-endpoint options and their query-string serialization.
//!
//! [`QueryOptions`] models everything a Logo Objects list call accepts.
//! Serialization order is part of the contract (tests assert exact strings):
//! `limit`, `offset`, `fields`, `sort` (plus `sortDirection` when
//! descending), `q`, `count`, `expandLevel`, then extra parameters in
//! insertion order. Absent options emit nothing.
//!
//! The `q` value is inserted verbatim: it is either a pre-built filter from
//! [`crate::SearchCriteria::compile`] or a raw expression the caller already
//! formatted for the wire, and the service expects it unencoded.

use crate::SortDir;

/// Sort specification for a list call.
///
/// The service takes one comma-joined field list with a single shared
/// direction, so the four accepted input shapes (one field, many fields,
/// either with an explicit direction) all normalize into this struct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    fields: Vec<String>,
    dir: SortDir,
}

impl SortSpec {
    /// Ascending sort over the given fields.
    pub fn asc<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            dir: SortDir::Asc,
        }
    }

    /// Descending sort over the given fields.
    pub fn desc<I>(fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            dir: SortDir::Desc,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn dir(&self) -> SortDir {
        self.dir
    }
}

impl From<&str> for SortSpec {
    fn from(field: &str) -> Self {
        SortSpec::asc([field])
    }
}

impl From<String> for SortSpec {
    fn from(field: String) -> Self {
        SortSpec::asc([field])
    }
}

impl From<(&str, SortDir)> for SortSpec {
    fn from((field, dir): (&str, SortDir)) -> Self {
        Self {
            fields: vec![field.to_owned()],
            dir,
        }
    }
}

impl From<Vec<&str>> for SortSpec {
    fn from(fields: Vec<&str>) -> Self {
        SortSpec::asc(fields)
    }
}

impl From<Vec<String>> for SortSpec {
    fn from(fields: Vec<String>) -> Self {
        SortSpec::asc(fields)
    }
}

impl From<(Vec<&str>, SortDir)> for SortSpec {
    fn from((fields, dir): (Vec<&str>, SortDir)) -> Self {
        Self {
            fields: fields.into_iter().map(str::to_owned).collect(),
            dir,
        }
    }
}

impl<const N: usize> From<[&str; N]> for SortSpec {
    fn from(fields: [&str; N]) -> Self {
        SortSpec::asc(fields)
    }
}

impl<const N: usize> From<([&str; N], SortDir)> for SortSpec {
    fn from((fields, dir): ([&str; N], SortDir)) -> Self {
        Self {
            fields: fields.iter().map(|f| (*f).to_owned()).collect(),
            dir,
        }
    }
}

/// Options accepted by every list/lookup endpoint.
///
/// All fields are optional; [`QueryOptions::to_query_string`] omits a
/// parameter entirely when its value is absent. Unrecognized parameters the
/// service understands (e.g. `slCode`) go through `extra` as literal
/// `key=value` pairs in insertion order. That includes the short `expand`
/// spelling some endpoints accept alongside `expandLevel`: pass it via
/// [`QueryOptions::param`], as only `expandLevel` is modeled as a field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryOptions {
    /// Page size cap.
    pub limit: Option<u32>,
    /// Pagination skip.
    pub offset: Option<u32>,
    /// Projection list, serialized as one comma-joined `fields=` token.
    pub fields: Option<Vec<String>>,
    /// Sort specification, see [`SortSpec`].
    pub sort: Option<SortSpec>,
    /// Pre-built filter expression, passed through verbatim.
    pub q: Option<String>,
    /// Request a total-count computation; serialized only when `true`.
    pub count: Option<bool>,
    /// Relation-expansion depth/selector, serialized as `expandLevel` and
    /// passed through verbatim. For endpoints that take the short `expand`
    /// spelling instead, forward it through `extra`.
    pub expand_level: Option<String>,
    /// Additional literal `key=value` parameters, in insertion order.
    pub extra: Vec<(String, String)>,
}

impl QueryOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the projection list.
    #[must_use]
    pub fn fields<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Set the sort specification.
    ///
    /// Accepts a field name, a field list, or either paired with a
    /// [`SortDir`].
    #[must_use]
    pub fn sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set a pre-built `q` filter expression (inserted verbatim).
    #[must_use]
    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    #[must_use]
    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn expand_level(mut self, expand_level: impl Into<String>) -> Self {
        self.expand_level = Some(expand_level.into());
        self
    }

    /// Forward an additional literal `key=value` parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Serialize into a URL query string without the leading `?`.
    ///
    /// Empty options yield an empty string so callers can omit the `?`
    /// separator entirely. This is a pure passthrough builder: values are
    /// not validated or re-encoded.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        if let Some(fields) = &self.fields {
            parts.push(format!("fields={}", fields.join(",")));
        }
        if let Some(sort) = &self.sort {
            parts.push(format!("sort={}", sort.fields().join(",")));
            if sort.dir() == SortDir::Desc {
                parts.push("sortDirection=desc".to_owned());
            }
        }
        if let Some(q) = &self.q {
            parts.push(format!("q={q}"));
        }
        if self.count == Some(true) {
            parts.push("count=true".to_owned());
        }
        if let Some(expand_level) = &self.expand_level {
            parts.push(format!("expandLevel={expand_level}"));
        }
        for (key, value) in &self.extra {
            parts.push(format!("{key}={value}"));
        }

        parts.join("&")
    }
}
