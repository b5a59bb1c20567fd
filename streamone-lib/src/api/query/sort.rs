//! Ordering types for v1 list queries.

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the wire representation.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// Specifies the ordering of v1 list results.
///
/// Fields are encoded in insertion order, which determines sort precedence
/// (primary, secondary, ...).
///
/// # Example
///
/// ```
/// use streamone_lib::api::query::SortSpec;
///
/// let sort = SortSpec::desc("total")
///     .then_asc("customerName");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    fields: Vec<(String, Direction)>,
}

impl SortSpec {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), Direction::Asc)],
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), Direction::Desc)],
        }
    }

    /// Adds a secondary ascending sort on a field.
    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Asc));
        self
    }

    /// Adds a secondary descending sort on a field.
    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Desc));
        self
    }

    /// Returns the sorted fields with their directions, in precedence order.
    pub fn fields(&self) -> &[(String, Direction)] {
        &self.fields
    }
}
