//! v3 orders endpoints.

use super::pages::ListPages;
use super::pages::ListRecords;
use super::resolve_page_size;
use crate::error::Error;
use crate::error::ValidationError;
use crate::StreamOneClient;

/// Parameters for the order list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListOrdersRequest {
    /// Results per page; defaults to the client's default page size.
    pub page_size: Option<u32>,
    /// Filter by order status.
    pub status: Option<String>,
}

impl ListOrdersRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Filters by order status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn encode(&self, default_page_size: u32) -> Result<Vec<(String, String)>, ValidationError> {
        let page_size = resolve_page_size(self.page_size, default_page_size)?;
        let mut params = vec![("pageSize".to_string(), page_size.to_string())];
        if let Some(status) = &self.status {
            params.push(("status".to_string(), status.clone()));
        }
        Ok(params)
    }
}

impl StreamOneClient {
    /// Lists the account's orders, following pagination transparently.
    pub fn list_account_orders(
        &self,
        request: ListOrdersRequest,
    ) -> Result<ListRecords<'_>, Error> {
        let query = request.encode(self.default_page_size())?;
        Ok(ListRecords::new(ListPages::new(
            self,
            self.v3_url("/orders"),
            query,
            "orders",
            false,
        )))
    }

    /// Lists a customer's orders, following pagination transparently.
    pub fn list_customer_orders(
        &self,
        customer_id: &str,
        request: ListOrdersRequest,
    ) -> Result<ListRecords<'_>, Error> {
        let query = request.encode(self.default_page_size())?;
        Ok(ListRecords::new(ListPages::new(
            self,
            self.v3_url(&format!("/customers/{customer_id}/orders")),
            query,
            "orders",
            false,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        let params = ListOrdersRequest::new()
            .page_size(20)
            .status("SHIPPED")
            .encode(100)
            .unwrap();
        assert_eq!(
            params,
            vec![
                ("pageSize".to_string(), "20".to_string()),
                ("status".to_string(), "SHIPPED".to_string()),
            ]
        );
    }
}
