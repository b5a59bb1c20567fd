//! Authentication error types

/// Errors that can occur during authentication or token refresh.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Access token was rejected and no refresh token is available.
    #[error("Access token rejected and no refresh token configured")]
    NoRefreshToken,

    /// The refresh-token exchange failed.
    #[error("Token refresh failed: {message}")]
    RefreshFailed { message: String },

    /// Network error during authentication.
    #[error("Network error during auth: {0}")]
    Network(#[from] reqwest::Error),

    /// Failed to parse the token endpoint response.
    #[error("Auth response parse error: {0}")]
    Parse(String),

    /// Failed to persist rotated tokens back to the config file.
    #[error("Failed to persist refreshed tokens: {0}")]
    Persist(String),
}
