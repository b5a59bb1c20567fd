//! v1 customers endpoints.

use serde_json::Value;

use super::V1ListQuery;
use crate::client::AuthScheme;
use crate::error::ApiError;
use crate::error::Error;
use crate::StreamOneClient;

impl StreamOneClient {
    /// Lists customers through the legacy v1 endpoint, or fetches one when
    /// `customer_id` is given.
    #[deprecated(note = "use the v3 customer endpoints instead")]
    pub async fn customers_v1(
        &self,
        customer_id: Option<&str>,
        query: &V1ListQuery,
    ) -> Result<Value, Error> {
        let url = match customer_id {
            Some(id) => self.v1_url(&format!("/customers/{id}")),
            None => self.v1_url("/customers"),
        };
        let params = query.encode()?;
        let response = self.get(AuthScheme::Basic, &url, &params).await?;
        let body = response.json().await.map_err(ApiError::from)?;
        Ok(body)
    }
}
