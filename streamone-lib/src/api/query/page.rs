//! Page type for paginated v3 list results.

use crate::model::Record;

/// One page of a v3 list result.
///
/// Holds the records of the page plus the opaque `nextPageToken`. An absent
/// or empty token means this was the last page of the logical sequence. The
/// token must be passed back verbatim; it is never parsed or constructed by
/// the SDK.
#[derive(Debug, Clone)]
pub struct Page {
    records: Vec<Record>,
    next_page_token: Option<String>,
}

impl Page {
    /// Creates a new page with records and no continuation token.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            next_page_token: None,
        }
    }

    /// Sets the continuation token for fetching the next page.
    pub fn with_next_page_token(mut self, token: impl Into<String>) -> Self {
        self.next_page_token = Some(token.into());
        self
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the opaque continuation token, if more pages are available.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token.as_deref()
    }

    /// Returns `true` if there are more pages available.
    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
