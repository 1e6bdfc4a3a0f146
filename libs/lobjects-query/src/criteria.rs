//! Search criteria and their compilation into `q` filter expressions.
//!
//! A criteria value maps per-entity fields to constraints. Fields are typed:
//! every entity declares a [`SearchField`] enum whose static table carries
//! both the camelCase criteria key and the backend UPPER_SNAKE column name.
//! The mapping is a fixed table rather than a generic case transform because
//! several backend names are irregular; keeping it an enum also makes an
//! unmapped key unrepresentable.
//!
//! Value shape drives rendering, never content inference: a string scalar is
//! always single-quoted (embedded quotes doubled), numbers and booleans are
//! unquoted. A numeric-looking string still compares as a string.

use std::fmt::Write as _;

/// Per-entity search field table.
///
/// Mirrors the service schema: `key()` is the camelCase criteria key,
/// `column()` the backend column the compiled filter references.
pub trait SearchField: Copy + Eq + std::fmt::Debug + 'static {
    const FIELDS: &'static [Self];

    /// camelCase criteria key (e.g. `maintNumber`).
    fn key(&self) -> &'static str;

    /// Backend column name (e.g. `MAINT_NUMBER`).
    fn column(&self) -> &'static str;

    /// Resolve a field from its criteria key.
    fn from_key(key: &str) -> Option<Self> {
        Self::FIELDS.iter().copied().find(|f| f.key() == key)
    }
}

/// Scalar filter value.
///
/// The variant, not the content, decides quoting on the wire.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    /// Render in the service's literal syntax: strings single-quoted with
    /// embedded single quotes doubled, everything else in plain decimal or
    /// boolean text.
    fn render(&self) -> String {
        match self {
            Scalar::Str(s) => quote(s),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

/// Single-quote a string literal, doubling embedded single quotes.
///
/// This is the one escaping rule of the wire format, applied uniformly to
/// `eq` and `like` values.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

/// Operator set targeting a single field.
///
/// Operators render in a fixed order (`eq`, `like`, `gte`, `lte`, `gt`,
/// `lt`, `in`) and are joined with ` and ` when several are present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldOps {
    pub eq: Option<Scalar>,
    pub like: Option<String>,
    pub gte: Option<Scalar>,
    pub lte: Option<Scalar>,
    pub gt: Option<Scalar>,
    pub lt: Option<Scalar>,
    pub in_list: Vec<Scalar>,
}

impl FieldOps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(mut self, value: impl Into<Scalar>) -> Self {
        self.eq = Some(value.into());
        self
    }

    /// Prefix match; renders with the service's trailing `*` wildcard.
    #[must_use]
    pub fn like(mut self, value: impl Into<String>) -> Self {
        self.like = Some(value.into());
        self
    }

    #[must_use]
    pub fn gte(mut self, value: impl Into<Scalar>) -> Self {
        self.gte = Some(value.into());
        self
    }

    #[must_use]
    pub fn lte(mut self, value: impl Into<Scalar>) -> Self {
        self.lte = Some(value.into());
        self
    }

    #[must_use]
    pub fn gt(mut self, value: impl Into<Scalar>) -> Self {
        self.gt = Some(value.into());
        self
    }

    #[must_use]
    pub fn lt(mut self, value: impl Into<Scalar>) -> Self {
        self.lt = Some(value.into());
        self
    }

    /// OR-of-equalities membership test.
    #[must_use]
    pub fn in_list<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Scalar>,
    {
        self.in_list = values.into_iter().map(Into::into).collect();
        self
    }

    fn is_empty(&self) -> bool {
        self.eq.is_none()
            && self.like.is_none()
            && self.gte.is_none()
            && self.lte.is_none()
            && self.gt.is_none()
            && self.lt.is_none()
            && self.in_list.is_empty()
    }
}

/// Constraint attached to one criteria field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// Shorthand for an equality test.
    Scalar(Scalar),
    /// Shorthand for an OR-of-equalities, like the `in` operator.
    OneOf(Vec<Scalar>),
    /// Explicit operator set.
    Ops(FieldOps),
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<FieldOps> for FieldValue {
    fn from(value: FieldOps) -> Self {
        FieldValue::Ops(value)
    }
}

impl From<Vec<Scalar>> for FieldValue {
    fn from(values: Vec<Scalar>) -> Self {
        FieldValue::OneOf(values)
    }
}

impl From<Vec<i64>> for FieldValue {
    fn from(values: Vec<i64>) -> Self {
        FieldValue::OneOf(values.into_iter().map(Scalar::Int).collect())
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::OneOf(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered criteria mapping for one entity.
///
/// Entries keep insertion order, so [`SearchCriteria::compile`] is
/// deterministic and compiling the same criteria twice yields byte-identical
/// output.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchCriteria<F: SearchField> {
    entries: Vec<(F, FieldValue)>,
}

impl<F: SearchField> Default for SearchCriteria<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F: SearchField> SearchCriteria<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint for `field`.
    #[must_use]
    pub fn field(mut self, field: F, value: impl Into<FieldValue>) -> Self {
        self.entries.push((field, value.into()));
        self
    }

    pub fn push(&mut self, field: F, value: impl Into<FieldValue>) {
        self.entries.push((field, value.into()));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compile into a `q` filter expression.
    ///
    /// Returns `None` when no clause is produced (empty criteria, or only
    /// empty operator sets / empty `in` lists), so callers omit the `q`
    /// parameter instead of sending an empty filter. An empty `in` list is
    /// "no constraint" for that field, not an always-false clause.
    #[must_use]
    pub fn compile(&self) -> Option<String> {
        let mut clauses: Vec<String> = Vec::new();

        for (field, value) in &self.entries {
            let column = field.column();
            match value {
                FieldValue::Scalar(scalar) => {
                    clauses.push(format!("{column} eq {}", scalar.render()));
                }
                FieldValue::OneOf(values) => {
                    if let Some(clause) = render_one_of(column, values) {
                        clauses.push(clause);
                    }
                }
                FieldValue::Ops(ops) => {
                    if ops.is_empty() {
                        continue;
                    }
                    render_ops(column, ops, &mut clauses);
                }
            }
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" and "))
        }
    }
}

fn render_ops(column: &str, ops: &FieldOps, clauses: &mut Vec<String>) {
    if let Some(value) = &ops.eq {
        clauses.push(format!("{column} eq {}", value.render()));
    }
    if let Some(value) = &ops.like {
        clauses.push(format!("{column} like {}", quote(&format!("{value}*"))));
    }
    if let Some(value) = &ops.gte {
        clauses.push(format!("{column} gte {}", value.render()));
    }
    if let Some(value) = &ops.lte {
        clauses.push(format!("{column} lte {}", value.render()));
    }
    if let Some(value) = &ops.gt {
        clauses.push(format!("{column} gt {}", value.render()));
    }
    if let Some(value) = &ops.lt {
        clauses.push(format!("{column} lt {}", value.render()));
    }
    if let Some(clause) = render_one_of(column, &ops.in_list) {
        clauses.push(clause);
    }
}

/// Render a parenthesized OR-of-equalities, or `None` for an empty list.
fn render_one_of(column: &str, values: &[Scalar]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let mut out = String::from("(");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(" or ");
        }
        let _ = write!(out, "{column} eq {}", value.render());
    }
    out.push(')');
    Some(out)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum TestField {
        Code,
        Status,
        MaintNumber,
        Active,
    }

    impl SearchField for TestField {
        const FIELDS: &'static [Self] = &[
            Self::Code,
            Self::Status,
            Self::MaintNumber,
            Self::Active,
        ];

        fn key(&self) -> &'static str {
            match self {
                Self::Code => "code",
                Self::Status => "status",
                Self::MaintNumber => "maintNumber",
                Self::Active => "active",
            }
        }

        fn column(&self) -> &'static str {
            match self {
                Self::Code => "CODE",
                Self::Status => "STATUS",
                Self::MaintNumber => "MAINT_NUMBER",
                Self::Active => "ACTIVE",
            }
        }
    }

    #[test]
    fn empty_criteria_compile_to_none() {
        assert_eq!(SearchCriteria::<TestField>::new().compile(), None);
    }

    #[test]
    fn string_scalar_is_quoted_equality() {
        let compiled = SearchCriteria::new()
            .field(TestField::Code, "test")
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE eq 'test'"));
    }

    #[test]
    fn numeric_and_bool_scalars_are_unquoted() {
        let compiled = SearchCriteria::new()
            .field(TestField::Status, 2)
            .field(TestField::Active, true)
            .compile();
        assert_eq!(compiled.as_deref(), Some("STATUS eq 2 and ACTIVE eq true"));
    }

    #[test]
    fn numeric_looking_string_stays_quoted() {
        let compiled = SearchCriteria::new()
            .field(TestField::Code, "042")
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE eq '042'"));
    }

    #[test]
    fn like_appends_trailing_wildcard() {
        let compiled = SearchCriteria::new()
            .field(TestField::Code, FieldOps::new().like("AB"))
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE like 'AB*'"));
    }

    #[test]
    fn in_renders_parenthesized_or() {
        let compiled = SearchCriteria::new()
            .field(TestField::Status, FieldOps::new().in_list([1, 2, 3]))
            .compile();
        assert_eq!(
            compiled.as_deref(),
            Some("(STATUS eq 1 or STATUS eq 2 or STATUS eq 3)")
        );
    }

    #[test]
    fn array_shorthand_matches_in() {
        let compiled = SearchCriteria::new()
            .field(TestField::Status, vec![1_i64, 2, 3])
            .compile();
        assert_eq!(
            compiled.as_deref(),
            Some("(STATUS eq 1 or STATUS eq 2 or STATUS eq 3)")
        );
    }

    #[test]
    fn empty_in_list_is_no_constraint() {
        let compiled = SearchCriteria::new()
            .field(TestField::Status, Vec::<Scalar>::new())
            .compile();
        assert_eq!(compiled, None);

        // Same policy with surviving siblings: the empty list drops out.
        let compiled = SearchCriteria::new()
            .field(TestField::Status, Vec::<Scalar>::new())
            .field(TestField::Code, "A")
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE eq 'A'"));
    }

    #[test]
    fn empty_operator_set_is_no_constraint() {
        let compiled = SearchCriteria::new()
            .field(TestField::Code, FieldOps::new())
            .compile();
        assert_eq!(compiled, None);
    }

    #[test]
    fn clauses_join_with_and_in_insertion_order() {
        let compiled = SearchCriteria::new()
            .field(TestField::Code, "A")
            .field(TestField::Status, 1)
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE eq 'A' and STATUS eq 1"));
    }

    #[test]
    fn multiple_operators_on_one_field_join_with_and() {
        let compiled = SearchCriteria::new()
            .field(TestField::Status, FieldOps::new().gte(1).lte(5))
            .compile();
        assert_eq!(compiled.as_deref(), Some("STATUS gte 1 and STATUS lte 5"));
    }

    #[test]
    fn range_operators_render_unquoted() {
        let compiled = SearchCriteria::new()
            .field(TestField::Status, FieldOps::new().gt(0).lt(10))
            .compile();
        assert_eq!(compiled.as_deref(), Some("STATUS gt 0 and STATUS lt 10"));
    }

    #[test]
    fn single_quotes_are_doubled() {
        let compiled = SearchCriteria::new()
            .field(TestField::Code, "O'BRIEN")
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE eq 'O''BRIEN'"));

        let compiled = SearchCriteria::new()
            .field(TestField::Code, FieldOps::new().like("O'B"))
            .compile();
        assert_eq!(compiled.as_deref(), Some("CODE like 'O''B*'"));
    }

    #[test]
    fn irregular_column_names_come_from_the_table() {
        let compiled = SearchCriteria::new()
            .field(TestField::MaintNumber, "M-1")
            .compile();
        assert_eq!(compiled.as_deref(), Some("MAINT_NUMBER eq 'M-1'"));
        assert_eq!(TestField::from_key("maintNumber"), Some(TestField::MaintNumber));
        assert_eq!(TestField::from_key("maint_number"), None);
    }

    #[test]
    fn compilation_is_idempotent() {
        let criteria = SearchCriteria::new()
            .field(TestField::Code, FieldOps::new().like("AB").in_list([1, 2]))
            .field(TestField::Status, 1);
        assert_eq!(criteria.compile(), criteria.compile());
    }
}
