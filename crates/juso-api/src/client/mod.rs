//! juso.go.kr client.
//!
//! This module provides the main client interface for the address search
//! endpoint.

mod search;

use crate::config::JusoClientConfig;
use crate::error::JusoResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::JusoConfig;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default juso.go.kr client using the reqwest HTTP backend.
pub type DefaultJusoClient = JusoClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the juso.go.kr address search API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultJusoClient` for production code.
pub struct JusoClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: JusoConfig,
}

impl DefaultJusoClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// built. A missing approval key is only reported when searching.
    pub fn new(config: &JusoClientConfig) -> JusoResult<Self> {
        let internal_config = Self::to_internal_config(config)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }

    fn to_internal_config(config: &JusoClientConfig) -> JusoResult<JusoConfig> {
        Ok(JusoConfig {
            base_url: Url::parse(&config.base_url)?,
            confm_key: config.confm_key.clone(),
        })
    }
}

impl<B: HttpBackend> JusoClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: JusoConfig, backend: B) -> Self {
        Self { backend, config }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::DEFAULT_BASE_URL;
    use crate::error::JusoError;

    pub fn test_config() -> JusoConfig {
        JusoConfig {
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            confm_key: Some("test-key".to_string()),
        }
    }

    #[test]
    fn test_default_client_creation() {
        let config = JusoClientConfig::new().with_confm_key("key");
        let client = DefaultJusoClient::new(&config).unwrap();
        assert_eq!(client.config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.config.confm_key.as_deref(), Some("key"));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = JusoClientConfig::new().with_base_url("not a url");
        let result = DefaultJusoClient::new(&config);
        assert!(matches!(result, Err(JusoError::InvalidUrl(_))));
    }
}
