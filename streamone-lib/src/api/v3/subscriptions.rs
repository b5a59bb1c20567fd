//! v3 subscriptions endpoints.

use std::str::FromStr;

use super::pages::ListPages;
use super::pages::ListRecords;
use super::resolve_page_size;
use crate::api::query::DateRange;
use crate::api::query::Direction;
use crate::client::AuthScheme;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Record;
use crate::StreamOneClient;

/// The lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SubscriptionStatus {
    Accepted,
    Active,
    Available,
    Cancelled,
    Complete,
    Confirmed,
    Deleted,
    Draft,
    Error,
    Expired,
    Failed,
    InProgress,
    Ordered,
    Paused,
    Pending,
    Provisioning,
    Rejected,
    Stopped,
    Suspended,
}

impl SubscriptionStatus {
    /// Returns the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionStatus::Accepted => "ACCEPTED",
            SubscriptionStatus::Active => "ACTIVE",
            SubscriptionStatus::Available => "AVAILABLE",
            SubscriptionStatus::Cancelled => "CANCELLED",
            SubscriptionStatus::Complete => "COMPLETE",
            SubscriptionStatus::Confirmed => "CONFIRMED",
            SubscriptionStatus::Deleted => "DELETED",
            SubscriptionStatus::Draft => "DRAFT",
            SubscriptionStatus::Error => "ERROR",
            SubscriptionStatus::Expired => "EXPIRED",
            SubscriptionStatus::Failed => "FAILED",
            SubscriptionStatus::InProgress => "IN_PROGRESS",
            SubscriptionStatus::Ordered => "ORDERED",
            SubscriptionStatus::Paused => "PAUSED",
            SubscriptionStatus::Pending => "PENDING",
            SubscriptionStatus::Provisioning => "PROVISIONING",
            SubscriptionStatus::Rejected => "REJECTED",
            SubscriptionStatus::Stopped => "STOPPED",
            SubscriptionStatus::Suspended => "SUSPENDED",
        }
    }
}

impl FromStr for SubscriptionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPTED" => Ok(SubscriptionStatus::Accepted),
            "ACTIVE" => Ok(SubscriptionStatus::Active),
            "AVAILABLE" => Ok(SubscriptionStatus::Available),
            "CANCELLED" => Ok(SubscriptionStatus::Cancelled),
            "COMPLETE" => Ok(SubscriptionStatus::Complete),
            "CONFIRMED" => Ok(SubscriptionStatus::Confirmed),
            "DELETED" => Ok(SubscriptionStatus::Deleted),
            "DRAFT" => Ok(SubscriptionStatus::Draft),
            "ERROR" => Ok(SubscriptionStatus::Error),
            "EXPIRED" => Ok(SubscriptionStatus::Expired),
            "FAILED" => Ok(SubscriptionStatus::Failed),
            "IN_PROGRESS" => Ok(SubscriptionStatus::InProgress),
            "ORDERED" => Ok(SubscriptionStatus::Ordered),
            "PAUSED" => Ok(SubscriptionStatus::Paused),
            "PENDING" => Ok(SubscriptionStatus::Pending),
            "PROVISIONING" => Ok(SubscriptionStatus::Provisioning),
            "REJECTED" => Ok(SubscriptionStatus::Rejected),
            "STOPPED" => Ok(SubscriptionStatus::Stopped),
            "SUSPENDED" => Ok(SubscriptionStatus::Suspended),
            other => Err(ValidationError::new(
                "subscriptionStatus",
                format!("unknown subscription status '{other}'"),
            )),
        }
    }
}

/// Parameters for [`StreamOneClient::list_subscriptions`].
///
/// Every recognized filter is an explicit optional field; unset fields are
/// omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct ListSubscriptionsRequest {
    /// The unique customer id.
    pub customer_id: Option<String>,
    /// The unique subscription id.
    pub subscription_id: Option<String>,
    /// The unique reseller id.
    pub reseller_id: Option<i64>,
    /// The unique cloud provider id.
    pub provider_id: Option<i64>,
    /// The current status of the subscription.
    pub status: Option<SubscriptionStatus>,
    /// The relative or fixed start date range of the subscriptions.
    pub start_date_range: Option<DateRange>,
    /// The time when the subscription ends, ISO 8601.
    pub end_date: Option<String>,
    /// The relative or fixed end date range of the subscriptions.
    pub end_date_range: Option<DateRange>,
    /// The period for which the subscription service is active.
    pub billing_term: Option<String>,
    /// The total number of licenses for the account.
    pub total_license: Option<String>,
    /// The unique product id in the CCP catalog.
    pub ccp_product_id: Option<String>,
    /// The unique product id in the provider catalog.
    pub provider_product_id: Option<String>,
    /// The end customer's purchase order.
    pub customer_po: Option<String>,
    /// The reseller's purchase order.
    pub reseller_po: Option<String>,
    /// Custom field filters, key-value pairs encoded as `customField.<key>`.
    pub custom_fields: Vec<(String, String)>,
    /// Name of the cloud provider (e.g. AWS, GCP).
    pub cloud_provider_name: Option<String>,
    /// Name of the account.
    pub account_name: Option<String>,
    /// Name of the customer.
    pub customer_name: Option<String>,
    /// Name of the subscription.
    pub subscription_name: Option<String>,
    /// The resource type identifier within the subscriptions.
    pub resource_type: Option<String>,
    /// Results per page; defaults to the client's default page size.
    pub page_size: Option<u32>,
    /// Free-form additional filter expression.
    pub filter: Option<String>,
    /// Field to sort by.
    pub sort_by: Option<String>,
    /// Sort order.
    pub sort_order: Option<Direction>,
    /// The user id for filtering.
    pub user_id: Option<i64>,
}

impl ListSubscriptionsRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by customer id.
    pub fn customer_id(mut self, id: impl Into<String>) -> Self {
        self.customer_id = Some(id.into());
        self
    }

    /// Filters by subscription status.
    pub fn status(mut self, status: SubscriptionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filters by subscription start date.
    pub fn start_date_range(mut self, range: DateRange) -> Self {
        self.start_date_range = Some(range);
        self
    }

    /// Filters by subscription end date.
    pub fn end_date_range(mut self, range: DateRange) -> Self {
        self.end_date_range = Some(range);
        self
    }

    /// Adds a custom field filter.
    pub fn custom_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_fields.push((key.into(), value.into()));
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sorts by the given field.
    pub fn sort(mut self, field: impl Into<String>, order: Direction) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    fn encode(&self, default_page_size: u32) -> Result<Vec<(String, String)>, ValidationError> {
        let page_size = resolve_page_size(self.page_size, default_page_size)?;
        let mut params = vec![("pageSize".to_string(), page_size.to_string())];

        let mut push = |key: &str, value: Option<&String>| {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        };
        push("customerId", self.customer_id.as_ref());
        push("subscriptionId", self.subscription_id.as_ref());

        if let Some(id) = self.reseller_id {
            params.push(("resellerId".to_string(), id.to_string()));
        }
        if let Some(id) = self.provider_id {
            params.push(("providerId".to_string(), id.to_string()));
        }
        if let Some(status) = self.status {
            params.push(("subscriptionStatus".to_string(), status.as_str().to_string()));
        }
        if let Some(range) = &self.start_date_range {
            range.encode_into("startDateRange", &mut params);
        }
        if let Some(end_date) = &self.end_date {
            params.push(("endDate".to_string(), end_date.clone()));
        }
        if let Some(range) = &self.end_date_range {
            range.encode_into("endDateRange", &mut params);
        }

        let string_fields = [
            ("billingTerm", &self.billing_term),
            ("totalLicense", &self.total_license),
            ("ccpProductId", &self.ccp_product_id),
            ("providerProductId", &self.provider_product_id),
            ("customerPo", &self.customer_po),
            ("resellerPo", &self.reseller_po),
            ("cloudProviderName", &self.cloud_provider_name),
            ("accountName", &self.account_name),
            ("customerName", &self.customer_name),
            ("subscriptionName", &self.subscription_name),
            ("resourceType", &self.resource_type),
        ];
        for (key, value) in string_fields {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        }

        for (key, value) in &self.custom_fields {
            if key.is_empty() {
                return Err(ValidationError::new(
                    "customField",
                    "empty custom field name",
                ));
            }
            params.push((format!("customField.{key}"), value.clone()));
        }

        if let Some(filter) = &self.filter {
            params.push(("pagination.filter".to_string(), filter.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            params.push(("pagination.sortBy".to_string(), sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            params.push((
                "pagination.sortOrder".to_string(),
                order.as_str().to_string(),
            ));
        }
        if let Some(user_id) = self.user_id {
            params.push(("pagination.userId".to_string(), user_id.to_string()));
        }

        Ok(params)
    }
}

impl StreamOneClient {
    /// Lists subscriptions, following pagination transparently.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an out-of-range page size or an empty
    /// custom field name, before any request is sent. Enum-typed parameters
    /// (`status`, date ranges) are validated by construction.
    pub fn list_subscriptions(
        &self,
        request: ListSubscriptionsRequest,
    ) -> Result<ListRecords<'_>, Error> {
        let query = request.encode(self.default_page_size())?;
        Ok(ListRecords::new(ListPages::new(
            self,
            self.v3_url("/subscriptions"),
            query,
            "items",
            false,
        )))
    }

    /// Retrieves details of a customer's subscription.
    ///
    /// `refresh` asks the service to recompute the result before returning.
    pub async fn subscription_details(
        &self,
        customer_id: &str,
        subscription_id: &str,
        refresh: Option<bool>,
    ) -> Result<Record, Error> {
        let url = self.v3_url(&format!(
            "/customers/{customer_id}/subscriptions/{subscription_id}"
        ));
        let mut query = Vec::new();
        if let Some(refresh) = refresh {
            query.push(("refresh".to_string(), refresh.to_string()));
        }
        let response = self.get(AuthScheme::Bearer, &url, &query).await?;
        let record: Record = response.json().await.map_err(ApiError::from)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::query::RelativeDateRange;

    #[test]
    fn test_bogus_status_rejected_before_encode() {
        assert!("BOGUS".parse::<SubscriptionStatus>().is_err());
        assert_eq!(
            "SUSPENDED".parse::<SubscriptionStatus>().unwrap(),
            SubscriptionStatus::Suspended
        );
    }

    #[test]
    fn test_encode_enum_and_range_params() {
        let params = ListSubscriptionsRequest::new()
            .customer_id("c-1")
            .status(SubscriptionStatus::Active)
            .start_date_range(DateRange::relative(RelativeDateRange::MonthToDate))
            .custom_field("tier", "gold")
            .sort("endDate", Direction::Desc)
            .encode(100)
            .unwrap();

        assert!(params.contains(&("customerId".to_string(), "c-1".to_string())));
        assert!(params.contains(&("subscriptionStatus".to_string(), "ACTIVE".to_string())));
        assert!(params.contains(&(
            "startDateRange.relativeDateRange".to_string(),
            "MONTH_TO_DATE".to_string()
        )));
        assert!(params.contains(&("customField.tier".to_string(), "gold".to_string())));
        assert!(params.contains(&("pagination.sortBy".to_string(), "endDate".to_string())));
        assert!(params.contains(&("pagination.sortOrder".to_string(), "desc".to_string())));
    }

    #[test]
    fn test_empty_custom_field_rejected() {
        let result = ListSubscriptionsRequest::new()
            .custom_field("", "x")
            .encode(100);
        assert!(result.is_err());
    }
}
