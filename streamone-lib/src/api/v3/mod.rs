//! v3 resource-oriented API endpoints.
//!
//! All list endpoints return a [`ListRecords`] iterator that follows the
//! service's `nextPageToken` chain transparently. Request parameters live in
//! one explicit struct per endpoint with every recognized optional field
//! enumerated.

mod customers;
mod orders;
mod pages;
mod products;
mod reports;
mod subscriptions;

pub use customers::ListCustomersRequest;
pub use orders::ListOrdersRequest;
pub use pages::ListPages;
pub use pages::ListRecords;
pub use products::GetProductRequest;
pub use products::ListProductsRequest;
pub use reports::ReportDataRequest;
pub use reports::ReportsModule;
pub use subscriptions::ListSubscriptionsRequest;
pub use subscriptions::SubscriptionStatus;

use crate::error::ValidationError;

/// Maximum page size accepted by the v3 list endpoints.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// Resolves and validates the effective page size for a list request.
///
/// Oversized values are rejected, not silently truncated.
pub(crate) fn resolve_page_size(
    requested: Option<u32>,
    default: u32,
) -> Result<u32, ValidationError> {
    let size = requested.unwrap_or(default);
    if size == 0 {
        return Err(ValidationError::new("pageSize", "page size must be positive"));
    }
    if size > MAX_PAGE_SIZE {
        return Err(ValidationError::new(
            "pageSize",
            format!("page size {size} exceeds the service maximum of {MAX_PAGE_SIZE}"),
        ));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_applied() {
        assert_eq!(resolve_page_size(None, 100).unwrap(), 100);
    }

    #[test]
    fn test_oversized_rejected() {
        assert!(resolve_page_size(Some(MAX_PAGE_SIZE + 1), 100).is_err());
        assert_eq!(
            resolve_page_size(Some(MAX_PAGE_SIZE), 100).unwrap(),
            MAX_PAGE_SIZE
        );
    }

    #[test]
    fn test_zero_rejected() {
        assert!(resolve_page_size(Some(0), 100).is_err());
    }
}
