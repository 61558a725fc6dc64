//! Configuration for FTD management API clients.
//!
//! A single appliance base URL plus request-level settings. The access token
//! is held as a [`SecretString`] so it never appears in debug output or
//! serialized configuration.

use crate::Error;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

/// Configuration for an FTD client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FtdClientConfig {
    /// Appliance base URL (e.g. "https://ftd.example.com")
    #[validate(url)]
    pub base_url: String,

    /// Bearer token for request authentication
    #[serde(skip_serializing, default)]
    pub token: Option<SecretString>,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl FtdClientConfig {
    /// Create a new client configuration for the given appliance URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            token: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the bearer token used for authentication.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Set whether to verify TLS certificates.
    ///
    /// Appliances commonly ship with self-signed certificates; disabling
    /// verification is an explicit opt-in.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse and validate the appliance base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::ConfigError(format!("Invalid base URL: {e}")))
    }
}

impl Default for FtdClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://localhost".to_string(),
            token: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_new() {
        let config = FtdClientConfig::new("https://ftd.example.com").unwrap();
        assert_eq!(config.base_url, "https://ftd.example.com");
        assert!(config.tls_verify);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_config_invalid_url() {
        let result = FtdClientConfig::new("not-a-url");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = FtdClientConfig::new("https://ftd.example.com")
            .unwrap()
            .with_token("test-token")
            .with_tls_verify(false)
            .with_timeout(60);

        assert_eq!(
            config.token.as_ref().map(ExposeSecret::expose_secret),
            Some("test-token")
        );
        assert!(!config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_config_parse_base_url() {
        let config = FtdClientConfig::new("https://ftd.example.com:8443").unwrap();
        let url = config.parse_base_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("ftd.example.com"));
        assert_eq!(url.port(), Some(8443));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = FtdClientConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 301;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 30;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_token_not_serialized() {
        let config = FtdClientConfig::new("https://ftd.example.com")
            .unwrap()
            .with_token("super-secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }
}
