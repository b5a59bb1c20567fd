//! TokenProvider trait and AccessToken

use async_trait::async_trait;

use crate::error::AuthError;

/// An OAuth2 access token with an optional refresh token.
///
/// ION tokens are opaque strings without client-visible expiry metadata;
/// validity is checked server-side (see
/// [`RefreshingTokenProvider`](super::RefreshingTokenProvider)).
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The bearer token used for API authentication.
    pub access_token: String,
    /// Refresh token for obtaining new access tokens without re-authentication.
    pub refresh_token: Option<String>,
}

impl AccessToken {
    /// Creates a new access token with just the token string.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
        }
    }

    /// Creates a new access token with a refresh token.
    pub fn with_refresh(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: Some(refresh_token.into()),
        }
    }

    /// Returns the token as a bearer authorization header value.
    pub fn as_bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Trait for providing access tokens for v3 API calls.
///
/// The client calls `get_token` before each v3 request. Implementations are
/// responsible for caching and refreshing; the client never inspects the
/// token beyond placing it in the `Authorization` header.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Gets an access token for the given ION base URL.
    async fn get_token(&self, base_url: &str) -> Result<AccessToken, AuthError>;
}

/// A token provider that always returns the same static token.
///
/// Useful for testing or short-lived scripts where refresh handling is not
/// needed.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: AccessToken,
}

impl StaticTokenProvider {
    /// Creates a new static token provider with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(access_token),
        }
    }

    /// Creates a new static token provider from an existing token.
    pub fn from_token(token: AccessToken) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn get_token(&self, _base_url: &str) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}
