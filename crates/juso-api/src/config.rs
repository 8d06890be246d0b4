//! Public configuration for the juso.go.kr client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Search endpoint of the public road-name address API.
pub const DEFAULT_BASE_URL: &str = "https://business.juso.go.kr/addrlink/addrLinkApi.do";

/// Configuration for the juso.go.kr client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use juso_api::JusoClientConfig;
/// use std::time::Duration;
///
/// let config = JusoClientConfig::new()
///     .with_confm_key("my-approval-key")
///     .with_timeout(Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct JusoClientConfig {
    /// Search endpoint URL
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Approval key (승인키) issued by the address service
    pub(crate) confm_key: Option<String>,
}

impl Default for JusoClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("juso-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            confm_key: None,
        }
    }
}

impl JusoClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search endpoint URL.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the approval key sent as `confmKey`.
    #[must_use]
    pub fn with_confm_key(mut self, key: impl Into<String>) -> Self {
        self.confm_key = Some(key.into());
        self
    }

    /// Set an optional approval key.
    ///
    /// A client without a key still builds; every search then fails with a
    /// configuration error.
    #[must_use]
    pub fn with_optional_confm_key(mut self, key: Option<String>) -> Self {
        self.confm_key = key;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JusoClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.contains("juso-api"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.confm_key.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = JusoClientConfig::new()
            .with_base_url("http://localhost:8080/search")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_confm_key("secret");

        assert_eq!(config.base_url, "http://localhost:8080/search");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.confm_key, Some("secret".to_string()));
    }

    #[test]
    fn test_optional_confm_key() {
        let with_key = JusoClientConfig::new().with_optional_confm_key(Some("key".to_string()));
        assert_eq!(with_key.confm_key, Some("key".to_string()));

        let without_key = JusoClientConfig::new().with_optional_confm_key(None);
        assert!(without_key.confm_key.is_none());
    }
}
