//! v3 customers endpoints.

use super::pages::ListPages;
use super::pages::ListRecords;
use super::resolve_page_size;
use crate::client::AuthScheme;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Record;
use crate::StreamOneClient;

/// Parameters for [`StreamOneClient::list_customers`].
///
/// All filters are optional; unset fields are omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct ListCustomersRequest {
    /// Results per page; defaults to the client's default page size.
    pub page_size: Option<u32>,
    /// Filter by customer email.
    pub customer_email: Option<String>,
    /// Filter by language code.
    pub language_code: Option<String>,
    /// Filter by customer status.
    pub customer_status: Option<String>,
    /// Filter by customer name.
    pub customer_name: Option<String>,
}

impl ListCustomersRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Filters by customer email.
    pub fn customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    /// Filters by language code.
    pub fn language_code(mut self, code: impl Into<String>) -> Self {
        self.language_code = Some(code.into());
        self
    }

    /// Filters by customer status.
    pub fn customer_status(mut self, status: impl Into<String>) -> Self {
        self.customer_status = Some(status.into());
        self
    }

    /// Filters by customer name.
    pub fn customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    fn encode(&self, default_page_size: u32) -> Result<Vec<(String, String)>, ValidationError> {
        let page_size = resolve_page_size(self.page_size, default_page_size)?;
        let mut params = vec![("pageSize".to_string(), page_size.to_string())];
        if let Some(email) = &self.customer_email {
            params.push(("filter.customerEmail".to_string(), email.clone()));
        }
        if let Some(code) = &self.language_code {
            params.push(("filter.languageCode".to_string(), code.clone()));
        }
        if let Some(status) = &self.customer_status {
            params.push(("filter.customerStatus".to_string(), status.clone()));
        }
        if let Some(name) = &self.customer_name {
            params.push(("filter.customerName".to_string(), name.clone()));
        }
        Ok(params)
    }
}

impl StreamOneClient {
    /// Lists customers, following pagination transparently.
    ///
    /// Each record carries an `id` field derived from its resource `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an out-of-range page size, before any
    /// request is sent.
    pub fn list_customers(&self, request: ListCustomersRequest) -> Result<ListRecords<'_>, Error> {
        let query = request.encode(self.default_page_size())?;
        Ok(ListRecords::new(ListPages::new(
            self,
            self.v3_url("/customers"),
            query,
            "customers",
            true,
        )))
    }

    /// Retrieves a single customer by id.
    pub async fn get_customer(&self, customer_id: &str) -> Result<Record, Error> {
        let url = self.v3_url(&format!("/customers/{customer_id}"));
        let response = self.get(AuthScheme::Bearer, &url, &[]).await?;
        let record: Record = response.json().await.map_err(ApiError::from)?;
        Ok(record.with_derived_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_only_set_filters() {
        let params = ListCustomersRequest::new()
            .customer_email("a@b.c")
            .customer_name("Contoso")
            .encode(100)
            .unwrap();
        assert_eq!(
            params,
            vec![
                ("pageSize".to_string(), "100".to_string()),
                ("filter.customerEmail".to_string(), "a@b.c".to_string()),
                ("filter.customerName".to_string(), "Contoso".to_string()),
            ]
        );
    }

    #[test]
    fn test_oversized_page_size_rejected() {
        let result = ListCustomersRequest::new().page_size(5000).encode(100);
        assert!(result.is_err());
    }
}
