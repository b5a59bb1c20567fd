//! v3 products endpoints.

use super::pages::ListPages;
use super::pages::ListRecords;
use super::resolve_page_size;
use crate::client::AuthScheme;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Record;
use crate::StreamOneClient;

/// Parameters for [`StreamOneClient::list_products`].
#[derive(Debug, Clone, Default)]
pub struct ListProductsRequest {
    /// Results per page; defaults to the client's default page size.
    pub page_size: Option<u32>,
    /// The language for the product data.
    pub language: Option<String>,
    /// The product marketing display name to filter on.
    pub name: Option<String>,
    /// The external id assigned to SKUs.
    pub sku_external_id: Option<String>,
    /// The external id assigned to addons.
    pub addon_external_id: Option<String>,
    /// The id of the SKU.
    pub sku_id: Option<String>,
    /// The id of the addon.
    pub addon_id: Option<String>,
    /// The display name of the SKU.
    pub sku_display_name: Option<String>,
    /// The display name of the addon.
    pub addon_display_name: Option<String>,
}

impl ListProductsRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the language for the product data.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Filters by product display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters by SKU id.
    pub fn sku_id(mut self, id: impl Into<String>) -> Self {
        self.sku_id = Some(id.into());
        self
    }

    fn encode(&self, default_page_size: u32) -> Result<Vec<(String, String)>, ValidationError> {
        let page_size = resolve_page_size(self.page_size, default_page_size)?;
        let mut params = vec![("pageSize".to_string(), page_size.to_string())];
        if let Some(language) = &self.language {
            params.push(("language".to_string(), language.clone()));
        }

        let filters = [
            ("filter.name", &self.name),
            ("filter.skuExternalId", &self.sku_external_id),
            ("filter.addonExternalId", &self.addon_external_id),
            ("filter.skuId", &self.sku_id),
            ("filter.addonId", &self.addon_id),
            ("filter.skuDisplayName", &self.sku_display_name),
            ("filter.addonDisplayName", &self.addon_display_name),
        ];
        for (key, value) in filters {
            if let Some(value) = value {
                params.push((key.to_string(), value.clone()));
            }
        }
        Ok(params)
    }
}

/// Parameters for [`StreamOneClient::get_product`].
///
/// The `exclude_*` flags default to `true`: detail sections are opt-in, as
/// most callers only need the product core.
#[derive(Debug, Clone)]
pub struct GetProductRequest {
    /// The language for the product data.
    pub language: Option<String>,
    /// Customer id used to resolve pricebook pricing.
    pub pricebook_customer_id: Option<i64>,
    /// The version of the product.
    pub product_version: Option<String>,
    /// Exclude pricing information.
    pub exclude_pricing: bool,
    /// Exclude marketing information.
    pub exclude_marketing: bool,
    /// Exclude the product definition.
    pub exclude_definition: bool,
    /// Exclude version history.
    pub exclude_version_history: bool,
    /// Exclude deployment information.
    pub exclude_deployment: bool,
    /// The role of the calling client.
    pub client_role: String,
}

impl Default for GetProductRequest {
    fn default() -> Self {
        Self {
            language: None,
            pricebook_customer_id: None,
            product_version: None,
            exclude_pricing: true,
            exclude_marketing: true,
            exclude_definition: true,
            exclude_version_history: true,
            exclude_deployment: true,
            client_role: "CUSTOMER".to_string(),
        }
    }
}

impl GetProductRequest {
    /// Creates a request with default exclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Includes pricing information in the response.
    pub fn with_pricing(mut self) -> Self {
        self.exclude_pricing = false;
        self
    }

    /// Includes marketing information in the response.
    pub fn with_marketing(mut self) -> Self {
        self.exclude_marketing = false;
        self
    }

    /// Includes the product definition in the response.
    pub fn with_definition(mut self) -> Self {
        self.exclude_definition = false;
        self
    }

    fn encode(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(language) = &self.language {
            params.push(("language".to_string(), language.clone()));
        }
        if let Some(id) = self.pricebook_customer_id {
            params.push(("priceBookCustomerId".to_string(), id.to_string()));
        }
        if let Some(version) = &self.product_version {
            params.push(("productVersion".to_string(), version.clone()));
        }
        params.push((
            "excludeFilter.excludePricing".to_string(),
            self.exclude_pricing.to_string(),
        ));
        params.push((
            "excludeFilter.excludeMarketing".to_string(),
            self.exclude_marketing.to_string(),
        ));
        params.push((
            "excludeFilter.excludeDefinition".to_string(),
            self.exclude_definition.to_string(),
        ));
        params.push((
            "excludeFilter.excludeVersionHistory".to_string(),
            self.exclude_version_history.to_string(),
        ));
        params.push((
            "excludeFilter.excludeDeployment".to_string(),
            self.exclude_deployment.to_string(),
        ));
        params.push(("clientRole".to_string(), self.client_role.clone()));
        params
    }
}

impl StreamOneClient {
    /// Lists products, following pagination transparently.
    ///
    /// Each record carries an `id` field derived from its resource `name`.
    pub fn list_products(&self, request: ListProductsRequest) -> Result<ListRecords<'_>, Error> {
        let query = request.encode(self.default_page_size())?;
        Ok(ListRecords::new(ListPages::new(
            self,
            self.v3_url("/products"),
            query,
            "products",
            true,
        )))
    }

    /// Retrieves a single product by id.
    pub async fn get_product(
        &self,
        product_id: &str,
        request: GetProductRequest,
    ) -> Result<Record, Error> {
        let url = self.v3_url(&format!("/products/{product_id}"));
        let query = request.encode();
        let response = self.get(AuthScheme::Bearer, &url, &query).await?;
        let record: Record = response.json().await.map_err(ApiError::from)?;
        Ok(record.with_derived_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_encode_filter_prefix() {
        let params = ListProductsRequest::new()
            .name("Office")
            .sku_id("sku-1")
            .encode(100)
            .unwrap();
        assert!(params.contains(&("filter.name".to_string(), "Office".to_string())));
        assert!(params.contains(&("filter.skuId".to_string(), "sku-1".to_string())));
    }

    #[test]
    fn test_get_encode_exclusions_default_on() {
        let params = GetProductRequest::new().with_pricing().encode();
        assert!(params.contains(&(
            "excludeFilter.excludePricing".to_string(),
            "false".to_string()
        )));
        assert!(params.contains(&(
            "excludeFilter.excludeMarketing".to_string(),
            "true".to_string()
        )));
        assert!(params.contains(&("clientRole".to_string(), "CUSTOMER".to_string())));
    }
}
