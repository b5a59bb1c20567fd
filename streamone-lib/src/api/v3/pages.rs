//! Async iterators for v3 list pagination.

use std::collections::VecDeque;

use futures::Stream;
use serde_json::Value;

use crate::api::query::Page;
use crate::client::AuthScheme;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Record;
use crate::StreamOneClient;

/// Async iterator that yields pages of a v3 list result.
///
/// Passes the service-issued `nextPageToken` back verbatim on each follow-up
/// request; the token is never inspected or constructed. The first call
/// issues the initial request with the caller's filter parameters and no
/// token.
///
/// Once a response arrives without a token, or a fetch fails, the iterator
/// is exhausted: further calls return `None`. End of the logical sequence is
/// always `None`, never an error.
pub struct ListPages<'a> {
    client: &'a StreamOneClient,
    url: String,
    query: Vec<(String, String)>,
    /// Response key holding this endpoint's records (`customers`, `orders`, ...).
    items_key: &'static str,
    /// Whether to derive an `id` field from the resource `name`.
    derive_id: bool,
    next_token: Option<String>,
    started: bool,
    done: bool,
}

impl<'a> ListPages<'a> {
    pub(crate) fn new(
        client: &'a StreamOneClient,
        url: String,
        query: Vec<(String, String)>,
        items_key: &'static str,
        derive_id: bool,
    ) -> Self {
        Self {
            client,
            url,
            query,
            items_key,
            derive_id,
            next_token: None,
            started: false,
            done: false,
        }
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<Page, Error>> {
        if self.done {
            return None;
        }

        let mut query = self.query.clone();
        if self.started {
            match self.next_token.take() {
                Some(token) => query.push(("pageToken".to_string(), token)),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }

        match self.fetch(&query).await {
            Ok(page) => {
                self.started = true;
                match page.next_page_token() {
                    Some(token) => self.next_token = Some(token.to_string()),
                    None => self.done = true,
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    async fn fetch(&self, query: &[(String, String)]) -> Result<Page, Error> {
        let response = self
            .client
            .get(AuthScheme::Bearer, &self.url, query)
            .await?;

        let body: Value = response.json().await.map_err(ApiError::from)?;

        let records: Vec<Record> = match body.get(self.items_key) {
            Some(items) => serde_json::from_value(items.clone()).map_err(|e| {
                ApiError::parse_with_body(
                    format!("malformed '{}' array: {e}", self.items_key),
                    body.to_string(),
                )
            })?,
            None => Vec::new(),
        };

        let records = if self.derive_id {
            records.into_iter().map(Record::with_derived_id).collect()
        } else {
            records
        };

        let mut page = Page::new(records);
        // An empty token means the same as an absent one: last page.
        if let Some(token) = body.get("nextPageToken").and_then(Value::as_str)
            && !token.is_empty()
        {
            page = page.with_next_page_token(token);
        }
        Ok(page)
    }
}

/// Async iterator that yields individual records across pages.
///
/// This is the "iterate and it just works" surface for v3 list endpoints:
/// records come out in exactly the order the service returns them, across
/// page boundaries, with no reordering or deduplication. The only suspension
/// point is the fetch at a page boundary; while buffered records remain no
/// request is made.
///
/// A fetch failure mid-sequence surfaces only after the already-buffered
/// records have been yielded, and the iterator is terminal afterwards.
/// Iteration is single-consumer (`next` takes `&mut self`); restarting means
/// building a new iterator from the endpoint method, which re-issues the
/// initial request.
///
/// # Example
///
/// ```ignore
/// let mut orders = client.list_account_orders(Default::default())?;
/// while let Some(order) = orders.next().await {
///     println!("{:?}", order?);
/// }
/// ```
pub struct ListRecords<'a> {
    pages: ListPages<'a>,
    buffered: VecDeque<Record>,
}

impl<'a> ListRecords<'a> {
    pub(crate) fn new(pages: ListPages<'a>) -> Self {
        Self {
            pages,
            buffered: VecDeque::new(),
        }
    }

    /// Yields the next record.
    ///
    /// Returns `None` at the end of the logical sequence, and `Some(Err(..))`
    /// when a page fetch fails. The two are never conflated.
    pub async fn next(&mut self) -> Option<Result<Record, Error>> {
        loop {
            if let Some(record) = self.buffered.pop_front() {
                return Some(Ok(record));
            }

            match self.pages.next().await? {
                Ok(page) => self.buffered.extend(page.into_records()),
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Collects every remaining record, failing on the first fetch error.
    pub async fn try_collect(mut self) -> Result<Vec<Record>, Error> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await {
            records.push(record?);
        }
        Ok(records)
    }

    /// Converts this iterator into a [`futures::Stream`] of records.
    pub fn into_stream(mut self) -> impl Stream<Item = Result<Record, Error>> + 'a {
        async_stream::stream! {
            while let Some(record) = self.next().await {
                yield record;
            }
        }
    }

    /// Converts this iterator into page-level iteration.
    ///
    /// Any records already buffered by [`ListRecords::next`] are discarded,
    /// so convert before consuming records.
    pub fn into_pages(self) -> ListPages<'a> {
        self.pages
    }
}
