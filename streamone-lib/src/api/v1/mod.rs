//! v1 filter/sort/pagination API endpoints.
//!
//! The v1 surface authenticates with Basic credentials and pages with
//! `limit`/`offset` rather than page tokens. Responses are passed through as
//! raw JSON; the v1 payload shapes vary per endpoint and are not modeled.

mod billing;
mod customers;

pub use billing::GenerateInvoicesRequest;

use crate::api::query::encode_v1;
use crate::api::query::FilterSpec;
use crate::api::query::RelationList;
use crate::api::query::SortSpec;
use crate::error::ValidationError;

/// Query parameters shared by the v1 list endpoints.
///
/// Unset parts fall back to the service defaults: `limit=100`, `offset=0`,
/// no filters, no sort, no relations.
///
/// # Example
///
/// ```
/// use streamone_lib::api::query::FilterSpec;
/// use streamone_lib::api::query::SortSpec;
/// use streamone_lib::api::v1::V1ListQuery;
///
/// let query = V1ListQuery::new()
///     .filters(FilterSpec::new().partial("name", "Jo%"))
///     .sort(SortSpec::desc("createdAt"))
///     .limit(50);
/// ```
#[derive(Debug, Clone, Default)]
pub struct V1ListQuery {
    /// Field filters, applied in insertion order.
    pub filters: Option<FilterSpec>,
    /// Sort keys, applied in insertion order.
    pub sort: Option<SortSpec>,
    /// Related entities to embed in the response.
    pub relations: Option<RelationList>,
    /// Maximum number of results; the service default is 100.
    pub limit: Option<u32>,
    /// Number of results to skip; the service default is 0.
    pub offset: Option<u32>,
}

impl V1ListQuery {
    /// Creates a query with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field filters.
    pub fn filters(mut self, filters: FilterSpec) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Sets the sort keys.
    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the relations to embed.
    pub fn relations(mut self, relations: RelationList) -> Self {
        self.relations = Some(relations);
        self
    }

    /// Sets the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the result offset.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub(crate) fn encode(&self) -> Result<Vec<(String, String)>, ValidationError> {
        encode_v1(
            self.filters.as_ref(),
            self.sort.as_ref(),
            self.relations.as_ref(),
            self.limit,
            self.offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_uses_defaults() {
        let params = V1ListQuery::new().encode().unwrap();
        assert_eq!(
            params,
            vec![
                ("limit".to_string(), "100".to_string()),
                ("offset".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_full_query_ordering() {
        let params = V1ListQuery::new()
            .filters(FilterSpec::new().gte("total", 100))
            .sort(SortSpec::asc("dueDate"))
            .relations(RelationList::new().with("customer"))
            .limit(25)
            .offset(50)
            .encode()
            .unwrap();
        assert_eq!(
            params,
            vec![
                ("limit".to_string(), "25".to_string()),
                ("offset".to_string(), "50".to_string()),
                ("filter[total:gte]".to_string(), "100".to_string()),
                ("sort[dueDate]".to_string(), "asc".to_string()),
                ("relations".to_string(), "customer".to_string()),
            ]
        );
    }
}
