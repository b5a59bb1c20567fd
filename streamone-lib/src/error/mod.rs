//! Error types

mod api;
mod auth;
mod config;
mod validation;

pub use api::*;
pub use auth::*;
pub use config::*;
pub use validation::*;

/// Top-level error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid query input, detected before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// API call failure (transport-level or a service error response).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Authentication or token refresh failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Missing or malformed client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Returns the HTTP status code if this is a service error response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if the error was raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
