//! Client configuration loaded from a JSON file.

use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;

/// v1 API credentials (HTTP Basic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V1Credentials {
    /// The API key.
    pub api_key: String,
    /// The API secret.
    pub api_secret: String,
}

/// v3 API credentials (OAuth tokens).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct V3Credentials {
    /// The current bearer access token.
    pub access_token: String,
    /// Refresh token used when the access token is rejected.
    pub refresh_token: String,
}

/// Configuration for a [`StreamOneClient`](crate::StreamOneClient).
///
/// Mirrors the JSON config file shape:
///
/// ```json
/// {
///     "v1": { "api_key": "...", "api_secret": "..." },
///     "v3": { "access_token": "...", "refresh_token": "..." },
///     "accountid": "..."
/// }
/// ```
///
/// At least one of `v1`/`v3` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// v1 credentials, if the account uses the deprecated v1 API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<V1Credentials>,
    /// v3 credentials, if the account uses the v3 API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3: Option<V3Credentials>,
    /// The ION account id, used in v3 resource paths.
    #[serde(rename = "accountid")]
    pub account_id: String,
}

impl Config {
    /// Loads and validates configuration from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration back to a JSON file.
    ///
    /// Used to persist rotated v3 tokens after a refresh.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let raw = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, raw).await?;
        Ok(())
    }

    /// Checks that at least one credential generation is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.v1.is_none() && self.v3.is_none() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = serde_json::from_str(
            r#"{
                "v1": {"api_key": "k", "api_secret": "s"},
                "v3": {"access_token": "a", "refresh_token": "r"},
                "accountid": "12345"
            }"#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.account_id, "12345");
        assert_eq!(config.v1.unwrap().api_key, "k");
        assert_eq!(config.v3.unwrap().refresh_token, "r");
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("streamone.json");

        let config = Config {
            v1: None,
            v3: Some(V3Credentials {
                access_token: "a".to_string(),
                refresh_token: "r".to_string(),
            }),
            account_id: "12345".to_string(),
        };
        config.save(&path).await.unwrap();

        let loaded = Config::load(&path).await.unwrap();
        assert_eq!(loaded.account_id, "12345");
        assert_eq!(loaded.v3.unwrap().refresh_token, "r");
        // `skip_serializing_if` keeps the absent generation out of the file.
        assert!(loaded.v1.is_none());
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let config: Config = serde_json::from_str(r#"{"accountid": "12345"}"#).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingCredentials)
        ));
    }
}
