//! Main StreamOneClient

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;

use crate::auth::BasicCredentials;
use crate::auth::RefreshingTokenProvider;
use crate::auth::TokenProvider;
use crate::config::Config;
use crate::error::ApiError;
use crate::error::ConfigError;
use crate::error::Error;

const DEFAULT_BASE_URL: &str = "https://ion.tdsynnex.com";

/// Default v3 page size applied when a request does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Response encoding requested via the `Accept` header.
///
/// This is transport configuration only; the SDK never parses XML. Endpoints
/// that interpret their responses (all list and get operations) require the
/// default JSON encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accept {
    /// `application/json` (the default).
    #[default]
    Json,
    /// `text/xml`, passed through to the caller unparsed.
    Xml,
}

impl Accept {
    fn header_value(self) -> &'static str {
        match self {
            Accept::Json => "application/json",
            Accept::Xml => "text/xml",
        }
    }
}

/// Which authentication scheme a request uses.
#[derive(Debug, Clone, Copy)]
pub(crate) enum AuthScheme {
    /// v1: HTTP Basic from the configured key/secret.
    Basic,
    /// v3: bearer token from the configured [`TokenProvider`].
    Bearer,
}

/// The main client for the StreamOne ION API.
///
/// Cheap to clone (uses `Arc` internally) and safe to share across tasks.
/// Iterators returned by list endpoints borrow the client and are themselves
/// single-consumer; see [`ListRecords`](crate::api::v3::ListRecords).
///
/// # Example
///
/// ```ignore
/// use streamone_lib::StreamOneClient;
/// use streamone_lib::auth::StaticTokenProvider;
///
/// let client = StreamOneClient::builder()
///     .account_id("12345")
///     .token_provider(StaticTokenProvider::new("my-token"))
///     .build()?;
///
/// let mut customers = client.list_customers(Default::default())?;
/// while let Some(customer) = customers.next().await {
///     println!("{:?}", customer?);
/// }
/// ```
#[derive(Clone)]
pub struct StreamOneClient {
    inner: Arc<StreamOneClientInner>,
}

struct StreamOneClientInner {
    base_url: String,
    account_id: String,
    v1_credentials: Option<BasicCredentials>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    http_client: Client,
    timeout: Option<Duration>,
    default_page_size: u32,
    accept: Accept,
}

impl StreamOneClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> StreamOneClientBuilder<Missing> {
        StreamOneClientBuilder::new()
    }

    /// Builds a client from a JSON config file.
    ///
    /// v3 tokens rotated during refresh are written back to the same file,
    /// matching the behavior long-running integrations expect.
    pub async fn from_config_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let config = Config::load(path).await?;

        let mut builder = Self::builder().account_id(&config.account_id);
        if let Some(v1) = &config.v1 {
            builder = builder.v1_credentials(&v1.api_key, &v1.api_secret);
        }
        if let Some(v3) = &config.v3 {
            builder = builder.token_provider(
                RefreshingTokenProvider::new(&v3.access_token, &v3.refresh_token)
                    .persist_to(path),
            );
        }
        Ok(builder.build()?)
    }

    /// Builds a client from an already-loaded [`Config`].
    ///
    /// Unlike [`StreamOneClient::from_config_file`], rotated tokens are not
    /// persisted anywhere.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        let mut builder = Self::builder().account_id(&config.account_id);
        if let Some(v1) = &config.v1 {
            builder = builder.v1_credentials(&v1.api_key, &v1.api_secret);
        }
        if let Some(v3) = &config.v3 {
            builder = builder
                .token_provider(RefreshingTokenProvider::new(&v3.access_token, &v3.refresh_token));
        }
        Ok(builder.build()?)
    }

    /// Returns the ION base URL.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the configured account id.
    pub fn account_id(&self) -> &str {
        &self.inner.account_id
    }

    /// Returns the page size applied to v3 list requests by default.
    pub fn default_page_size(&self) -> u32 {
        self.inner.default_page_size
    }

    pub(crate) fn v1_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.inner.base_url.trim_end_matches('/'), path)
    }

    pub(crate) fn v3_url(&self, path: &str) -> String {
        format!(
            "{}/api/v3/accounts/{}{}",
            self.inner.base_url.trim_end_matches('/'),
            self.inner.account_id,
            path
        )
    }

    pub(crate) fn v1_credentials(&self) -> Result<&BasicCredentials, Error> {
        self.inner
            .v1_credentials
            .as_ref()
            .ok_or(Error::Config(ConfigError::MissingV1Credentials))
    }

    fn token_provider(&self) -> Result<&Arc<dyn TokenProvider>, Error> {
        self.inner
            .token_provider
            .as_ref()
            .ok_or(Error::Config(ConfigError::MissingV3Credentials))
    }

    /// Issues a GET request with ordered query parameters.
    pub(crate) async fn get(
        &self,
        scheme: AuthScheme,
        url: &str,
        query: &[(String, String)],
    ) -> Result<reqwest::Response, Error> {
        let request = self.inner.http_client.get(url).query(query);
        self.send(scheme, request).await
    }

    /// Issues a POST request with a JSON body.
    pub(crate) async fn post_json(
        &self,
        scheme: AuthScheme,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, Error> {
        let request = self.inner.http_client.post(url).json(body);
        self.send(scheme, request).await
    }

    /// Issues a POST request with a form-encoded body.
    pub(crate) async fn post_form(
        &self,
        scheme: AuthScheme,
        url: &str,
        form: &[(&str, String)],
    ) -> Result<reqwest::Response, Error> {
        let request = self.inner.http_client.post(url).form(form);
        self.send(scheme, request).await
    }

    /// Fetches a URL outside the authenticated API surface (e.g. pre-signed
    /// invoice file links).
    pub(crate) async fn get_raw(&self, url: &str) -> Result<reqwest::Response, Error> {
        let response = self
            .inner
            .http_client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from)?;
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api(ApiError::http(status, body)))
        }
    }

    /// Applies auth and the `Accept` preference, sends the request, and maps
    /// non-success statuses to [`ApiError::Http`].
    ///
    /// No retries happen here; retry policy belongs to the caller.
    async fn send(
        &self,
        scheme: AuthScheme,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let mut request = request.header(ACCEPT, self.inner.accept.header_value());

        request = match scheme {
            AuthScheme::Basic => {
                request.header(AUTHORIZATION, self.v1_credentials()?.header_value())
            }
            AuthScheme::Bearer => {
                let token = self
                    .token_provider()?
                    .get_token(&self.inner.base_url)
                    .await?;
                request.bearer_auth(&token.access_token)
            }
        };

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            match (e.is_timeout(), self.inner.timeout) {
                (true, Some(timeout)) => ApiError::Timeout(timeout),
                _ => ApiError::Network(e),
            }
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api(ApiError::http(status, body)))
        }
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`StreamOneClient`].
///
/// The account id is required at compile time via the typestate pattern; at
/// least one credential generation (v1 or v3) is checked at build time.
///
/// # Example
///
/// ```ignore
/// let client = StreamOneClient::builder()
///     .account_id("12345")
///     .v1_credentials("key", "secret")
///     .token_provider(provider)
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct StreamOneClientBuilder<A> {
    base_url: String,
    account_id: A,
    v1_credentials: Option<BasicCredentials>,
    token_provider: Option<Arc<dyn TokenProvider>>,
    http_client: Option<Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    default_page_size: u32,
    accept: Accept,
}

impl StreamOneClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_id: Missing,
            v1_credentials: None,
            token_provider: None,
            http_client: None,
            timeout: None,
            connect_timeout: None,
            default_page_size: DEFAULT_PAGE_SIZE,
            accept: Accept::Json,
        }
    }
}

impl Default for StreamOneClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> StreamOneClientBuilder<A> {
    /// Sets the ION account id used in v3 resource paths.
    pub fn account_id(self, account_id: impl Into<String>) -> StreamOneClientBuilder<Set<String>> {
        StreamOneClientBuilder {
            base_url: self.base_url,
            account_id: Set(account_id.into()),
            v1_credentials: self.v1_credentials,
            token_provider: self.token_provider,
            http_client: self.http_client,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            default_page_size: self.default_page_size,
            accept: self.accept,
        }
    }

    /// Overrides the ION base URL.
    ///
    /// Defaults to the production platform URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the v1 API key/secret pair.
    pub fn v1_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.v1_credentials = Some(BasicCredentials::new(api_key, api_secret));
        self
    }

    /// Sets the token provider used for v3 bearer authentication.
    pub fn token_provider<T: TokenProvider + 'static>(mut self, provider: T) -> Self {
        self.token_provider = Some(Arc::new(provider) as Arc<dyn TokenProvider>);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// Applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the default page size for v3 list requests.
    ///
    /// Defaults to [`DEFAULT_PAGE_SIZE`]. Individual requests can still set
    /// their own, subject to the service maximum.
    pub fn default_page_size(mut self, size: u32) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the requested response encoding.
    pub fn accept(mut self, accept: Accept) -> Self {
        self.accept = accept;
        self
    }
}

impl StreamOneClientBuilder<Set<String>> {
    /// Builds the [`StreamOneClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] when neither v1
    /// credentials nor a v3 token provider was configured.
    pub fn build(self) -> Result<StreamOneClient, ConfigError> {
        if self.v1_credentials.is_none() && self.token_provider.is_none() {
            return Err(ConfigError::MissingCredentials);
        }

        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        Ok(StreamOneClient {
            inner: Arc::new(StreamOneClientInner {
                base_url: self.base_url,
                account_id: self.account_id.0,
                v1_credentials: self.v1_credentials,
                token_provider: self.token_provider,
                http_client,
                timeout: self.timeout,
                default_page_size: self.default_page_size,
                accept: self.accept,
            }),
        })
    }
}
