//! Address lookup port.
//!
//! The external address service owns its wire format; this port only
//! exchanges normalized queries and records. The implementation lives in
//! `juso-api`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AddressQuery, AddressRecord};

/// Port trait for the external address-lookup service.
///
/// # Design
///
/// - Returns records in the order the service produced them
/// - Never retries; retry policy belongs to the caller
/// - No implementation details leak through this interface
#[async_trait]
pub trait AddressLookupPort: Send + Sync {
    /// Run one search page.
    async fn search(&self, query: &AddressQuery) -> Result<Vec<AddressRecord>, AddressLookupError>;
}

/// Errors from address lookup operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressLookupError {
    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The service answered, but not with something we can read.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The service rejected the request with its own error code.
    #[error("Address service error {code}: {message}")]
    Service {
        /// Service-specific error code
        code: String,
        /// Service-provided message
        message: String,
    },

    /// Configuration error (missing key, bad base URL).
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}
