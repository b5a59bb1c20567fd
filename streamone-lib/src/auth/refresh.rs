//! Self-refreshing token provider for the v3 API.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::AccessToken;
use super::TokenProvider;
use crate::error::AuthError;

/// Response from the `/oauth/token` refresh-token exchange.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
}

/// A token provider that validates the cached access token server-side and
/// refreshes it through the refresh-token grant when rejected.
///
/// The validation/refresh sequence follows the ION OAuth endpoints:
///
/// 1. `POST /oauth/validateAccess` with the current access token; a 200
///    means the token is still valid.
/// 2. Otherwise `POST /oauth/token` with `grant_type=refresh_token`; both
///    tokens are rotated.
///
/// If constructed with a config path, rotated tokens are written back to the
/// JSON config file so subsequent processes pick them up.
///
/// # Example
///
/// ```ignore
/// use streamone_lib::auth::RefreshingTokenProvider;
///
/// let provider = RefreshingTokenProvider::new("access", "refresh")
///     .persist_to("streamone.json");
/// ```
pub struct RefreshingTokenProvider {
    token: RwLock<AccessToken>,
    http_client: reqwest::Client,
    /// Config file to write rotated tokens back to.
    config_path: Option<PathBuf>,
}

impl RefreshingTokenProvider {
    /// Creates a provider from an access/refresh token pair.
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(AccessToken::with_refresh(access_token, refresh_token)),
            http_client: reqwest::Client::new(),
            config_path: None,
        }
    }

    /// Persists rotated tokens to the given config file after each refresh.
    pub fn persist_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Uses a custom HTTP client for the OAuth endpoints.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    /// Checks whether the current access token is still accepted.
    async fn validate(&self, base_url: &str, access_token: &str) -> Result<bool, AuthError> {
        let response = self
            .http_client
            .post(format!("{}/oauth/validateAccess", base_url))
            .form(&[("access_token", access_token)])
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// Exchanges the refresh token for a new token pair.
    async fn refresh(&self, base_url: &str, refresh_token: &str) -> Result<AccessToken, AuthError> {
        let response = self
            .http_client
            .post(format!("{}/oauth/token", base_url))
            .form(&[
                ("grant_type", "refresh_token"),
                ("redirect_uri", "http://localhost/"),
                ("refresh_token", refresh_token),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::RefreshFailed {
                message: format!("HTTP {status}: {body}"),
            });
        }

        let token_data: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Parse(e.to_string()))?;

        Ok(AccessToken::with_refresh(
            token_data.access_token,
            token_data.refresh_token,
        ))
    }

    /// Writes the rotated tokens back to the config file, if one was given.
    async fn persist(&self, token: &AccessToken) -> Result<(), AuthError> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let mut config = crate::Config::load(path)
            .await
            .map_err(|e| AuthError::Persist(e.to_string()))?;
        if let Some(v3) = config.v3.as_mut() {
            v3.access_token = token.access_token.clone();
            if let Some(refresh) = &token.refresh_token {
                v3.refresh_token = refresh.clone();
            }
        }
        config
            .save(path)
            .await
            .map_err(|e| AuthError::Persist(e.to_string()))
    }
}

#[async_trait]
impl TokenProvider for RefreshingTokenProvider {
    async fn get_token(&self, base_url: &str) -> Result<AccessToken, AuthError> {
        let current = self.token.read().await.clone();

        if self.validate(base_url, &current.access_token).await? {
            return Ok(current);
        }

        let Some(refresh_token) = &current.refresh_token else {
            return Err(AuthError::NoRefreshToken);
        };

        let rotated = self.refresh(base_url, refresh_token).await?;
        self.persist(&rotated).await?;

        let mut guard = self.token.write().await;
        *guard = rotated.clone();
        Ok(rotated)
    }
}
