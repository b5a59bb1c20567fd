//! Filter types for v1 list queries.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Filter modifier for a v1 filter clause.
///
/// `Min` and `Max` are documented aliases for `Gte` and `Lte`; they are
/// normalized at encode time and never appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    /// Exact match (the default when no modifier is given).
    #[default]
    Exact,
    /// Partial match; the value is passed verbatim (e.g. `Jo%`).
    Partial,
    /// Greater than.
    Gt,
    /// Less than.
    Lt,
    /// Greater than or equal.
    Gte,
    /// Less than or equal.
    Lte,
    /// Alias for `Gte`.
    Min,
    /// Alias for `Lte`.
    Max,
}

impl Modifier {
    /// Returns the modifier suffix for the wire parameter name.
    ///
    /// `Exact` has no suffix; `Min`/`Max` normalize to `gte`/`lte` here so
    /// the transport layer never observes them.
    pub(crate) fn wire_name(self) -> Option<&'static str> {
        match self {
            Modifier::Exact => None,
            Modifier::Partial => Some("partial"),
            Modifier::Gt => Some("gt"),
            Modifier::Lt => Some("lt"),
            Modifier::Gte | Modifier::Min => Some("gte"),
            Modifier::Lte | Modifier::Max => Some("lte"),
        }
    }
}

impl FromStr for Modifier {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Modifier::Exact),
            "partial" => Ok(Modifier::Partial),
            "gt" => Ok(Modifier::Gt),
            "lt" => Ok(Modifier::Lt),
            "gte" => Ok(Modifier::Gte),
            "lte" => Ok(Modifier::Lte),
            "min" => Ok(Modifier::Min),
            "max" => Ok(Modifier::Max),
            other => Err(ValidationError::new(
                "modifier",
                format!("unknown filter modifier '{other}'"),
            )),
        }
    }
}

/// A scalar filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// String value, passed verbatim.
    String(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::String(s) => f.write_str(s),
            FilterValue::Int(n) => write!(f, "{n}"),
            FilterValue::Float(n) => write!(f, "{n}"),
            FilterValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::String(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::String(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Int(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Int(n.into())
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Float(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

/// A single filter clause: a value and its match modifier.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    /// The value to filter by.
    pub value: FilterValue,
    /// How the value is matched.
    pub modifier: Modifier,
}

/// An ordered set of v1 field filters.
///
/// Entries are encoded in insertion order. Each entry maps a field name to a
/// [`FilterClause`].
///
/// # Example
///
/// ```
/// use streamone_lib::api::query::FilterSpec;
///
/// let filters = FilterSpec::new()
///     .partial("name", "Jo%")
///     .gte("total", 100)
///     .exact("status", "open");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    entries: Vec<(String, FilterClause)>,
}

impl FilterSpec {
    /// Creates an empty filter spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter with an explicit modifier.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<FilterValue>,
        modifier: Modifier,
    ) -> Self {
        self.entries.push((
            name.into(),
            FilterClause {
                value: value.into(),
                modifier,
            },
        ));
        self
    }

    /// Adds an exact-match filter.
    pub fn exact(self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field(name, value, Modifier::Exact)
    }

    /// Adds a partial-match filter.
    pub fn partial(self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field(name, value, Modifier::Partial)
    }

    /// Adds a greater-than filter.
    pub fn gt(self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field(name, value, Modifier::Gt)
    }

    /// Adds a less-than filter.
    pub fn lt(self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field(name, value, Modifier::Lt)
    }

    /// Adds a greater-than-or-equal filter.
    pub fn gte(self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field(name, value, Modifier::Gte)
    }

    /// Adds a less-than-or-equal filter.
    pub fn lte(self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.field(name, value, Modifier::Lte)
    }

    /// Returns the filter entries in insertion order.
    pub fn entries(&self) -> &[(String, FilterClause)] {
        &self.entries
    }

    /// Returns `true` if no filters have been added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
