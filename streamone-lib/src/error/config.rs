//! Configuration error types

/// Errors raised while loading or validating client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration names neither a v1 nor a v3 credential block.
    #[error(
        "Configuration must include v1 or v3 credentials and an account id. Expected structure: \
         {{\"v1\": {{\"api_key\": ..., \"api_secret\": ...}}, \
         \"v3\": {{\"access_token\": ..., \"refresh_token\": ...}}, \
         \"accountid\": ...}}"
    )]
    MissingCredentials,

    /// An operation required v1 credentials that were not configured.
    #[error("v1 credentials are not configured")]
    MissingV1Credentials,

    /// An operation required v3 credentials that were not configured.
    #[error("v3 credentials are not configured")]
    MissingV3Credentials,

    /// Failed to read or write the configuration file.
    #[error("Config file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON or has the wrong shape.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
