//! v1 billing and invoice endpoints.

use std::path::Path;
use std::path::PathBuf;

use chrono::Datelike;
use chrono::Utc;
use serde_json::Value;

use super::V1ListQuery;
use crate::client::AuthScheme;
use crate::error::ApiError;
use crate::error::Error;
use crate::StreamOneClient;

/// Parameters for [`StreamOneClient::generate_invoices`].
#[derive(Debug, Clone)]
pub struct GenerateInvoicesRequest {
    /// The billing source to generate invoices from.
    pub source: String,
    /// The billing period, e.g. `m-07-2026`. Defaults to the previous month.
    pub period: Option<String>,
    /// The status the generated invoices start in.
    pub status: String,
    /// Restrict generation to these customer ids.
    pub customers: Vec<String>,
    /// Restrict generation to these reseller ids.
    pub resellers: Vec<String>,
    /// Whether to email the invoices after generation.
    pub send_emails: bool,
}

impl GenerateInvoicesRequest {
    /// Creates a request for the given billing source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            period: None,
            status: "open".to_string(),
            customers: Vec::new(),
            resellers: Vec::new(),
            send_emails: false,
        }
    }

    /// Sets the billing period.
    pub fn period(mut self, period: impl Into<String>) -> Self {
        self.period = Some(period.into());
        self
    }

    /// Sets the invoice status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Restricts generation to the given customer ids.
    pub fn customers(mut self, customers: Vec<String>) -> Self {
        self.customers = customers;
        self
    }

    /// Restricts generation to the given reseller ids.
    pub fn resellers(mut self, resellers: Vec<String>) -> Self {
        self.resellers = resellers;
        self
    }

    /// Emails the invoices after generation.
    pub fn send_emails(mut self, send: bool) -> Self {
        self.send_emails = send;
        self
    }

    fn form(&self) -> Vec<(&'static str, String)> {
        let period = self
            .period
            .clone()
            .unwrap_or_else(|| previous_month_period(Utc::now().year(), Utc::now().month()));
        let mut form = vec![
            ("source", self.source.clone()),
            ("period", period),
            ("status", self.status.clone()),
            ("sendEmails", self.send_emails.to_string()),
        ];
        if !self.customers.is_empty() {
            form.push(("customers", self.customers.join(",")));
        }
        if !self.resellers.is_empty() {
            form.push(("resellers", self.resellers.join(",")));
        }
        form
    }
}

/// Formats the monthly billing period preceding the given year/month.
fn previous_month_period(year: i32, month: u32) -> String {
    let (year, month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    format!("m-{month:02}-{year}")
}

impl StreamOneClient {
    /// Lists the authenticated account's invoices.
    pub async fn my_invoices(&self, query: &V1ListQuery) -> Result<Value, Error> {
        let url = self.v1_url("/invoices/myinvoices");
        let params = query.encode()?;
        let response = self.get(AuthScheme::Basic, &url, &params).await?;
        let body = response.json().await.map_err(ApiError::from)?;
        Ok(body)
    }

    /// Lists a customer's invoices.
    pub async fn customer_invoices(
        &self,
        customer_id: &str,
        query: &V1ListQuery,
    ) -> Result<Value, Error> {
        let url = self.v1_url("/invoices");
        let mut params = query.encode()?;
        params.push(("customerId".to_string(), customer_id.to_string()));
        let response = self.get(AuthScheme::Basic, &url, &params).await?;
        let body = response.json().await.map_err(ApiError::from)?;
        Ok(body)
    }

    /// Retrieves the detailed data descriptor for an invoice, including the
    /// pre-signed URLs of its detail files.
    pub async fn detailed_invoice_data(&self, invoice_id: &str) -> Result<Value, Error> {
        let url = self.v1_url(&format!("/invoices/{invoice_id}/detailed"));
        let response = self.get(AuthScheme::Basic, &url, &[]).await?;
        let body = response.json().await.map_err(ApiError::from)?;
        Ok(body)
    }

    /// Downloads every detail file of an invoice into `save_folder`.
    ///
    /// File names are taken from the last path segment of each pre-signed
    /// URL, with its query string stripped. Returns the paths written.
    pub async fn download_detailed_invoices(
        &self,
        invoice_id: &str,
        save_folder: impl AsRef<Path>,
    ) -> Result<Vec<PathBuf>, Error> {
        let data = self.detailed_invoice_data(invoice_id).await?;
        let urls = data
            .pointer("/data/invoice/detailedInvoiceFilesUrls")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                Error::Api(ApiError::parse_with_body(
                    "invoice response missing 'data.invoice.detailedInvoiceFilesUrls'",
                    data.to_string(),
                ))
            })?;

        let mut written = Vec::new();
        for url in urls {
            let Some(url) = url.as_str() else {
                continue;
            };
            let response = self.get_raw(url).await?;
            let bytes = response.bytes().await.map_err(ApiError::from)?;
            let path = save_folder.as_ref().join(file_name_of(url));
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(ApiError::from)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Triggers invoice generation for a billing source and period.
    pub async fn generate_invoices(
        &self,
        request: &GenerateInvoicesRequest,
    ) -> Result<Value, Error> {
        let url = self.v1_url("/invoices/generate");
        let form = request.form();
        let response = self.post_form(AuthScheme::Basic, &url, &form).await?;
        let body = response.json().await.map_err(ApiError::from)?;
        Ok(body)
    }
}

/// Extracts the file name from a pre-signed URL, dropping the query string.
fn file_name_of(url: &str) -> &str {
    let base = url.split('?').next().unwrap_or(url);
    base.rsplit('/').next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previous_month_period() {
        assert_eq!(previous_month_period(2026, 8), "m-07-2026");
        assert_eq!(previous_month_period(2026, 1), "m-12-2025");
    }

    #[test]
    fn test_file_name_strips_query() {
        assert_eq!(
            file_name_of("https://cdn.example.com/inv/2026/detail.csv?sig=abc&exp=1"),
            "detail.csv"
        );
        assert_eq!(file_name_of("detail.csv"), "detail.csv");
    }

    #[test]
    fn test_form_defaults() {
        let form = GenerateInvoicesRequest::new("azure")
            .period("m-06-2026")
            .form();
        assert_eq!(
            form,
            vec![
                ("source", "azure".to_string()),
                ("period", "m-06-2026".to_string()),
                ("status", "open".to_string()),
                ("sendEmails", "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_form_joins_id_lists() {
        let form = GenerateInvoicesRequest::new("azure")
            .period("m-06-2026")
            .customers(vec!["c1".to_string(), "c2".to_string()])
            .form();
        assert!(form.contains(&("customers", "c1,c2".to_string())));
    }
}
