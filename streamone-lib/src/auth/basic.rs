//! HTTP Basic credentials for the v1 API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// API key/secret pair used for v1 HTTP Basic authentication.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    api_key: String,
    api_secret: String,
}

impl BasicCredentials {
    /// Creates credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Returns the `Authorization` header value.
    pub fn header_value(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.api_key, self.api_secret));
        format!("Basic {encoded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value() {
        let creds = BasicCredentials::new("key", "secret");
        // base64("key:secret")
        assert_eq!(creds.header_value(), "Basic a2V5OnNlY3JldA==");
    }
}
