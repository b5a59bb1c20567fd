//! Related-entity list for v1 queries.

/// An ordered list of related entities to eager-load (v1 only).
///
/// Encoded as a single comma-separated `relations` parameter. The v3 API has
/// no relations concept; v3 request structs simply do not accept this type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationList {
    names: Vec<String>,
}

impl RelationList {
    /// Creates an empty relation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a relation name.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Returns the relation names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` if no relations have been added.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RelationList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
