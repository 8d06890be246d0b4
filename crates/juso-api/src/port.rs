//! Port trait implementation for `JusoClient`.
//!
//! This module implements the core-owned `AddressLookupPort` trait for
//! `JusoClient`, mapping internal errors onto the port's error type.

use async_trait::async_trait;
use juso_core::{AddressLookupError, AddressLookupPort, AddressQuery, AddressRecord};

use crate::client::JusoClient;
use crate::error::JusoError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `JusoError` to core `AddressLookupError`.
fn map_error(err: JusoError) -> AddressLookupError {
    match err {
        JusoError::ApiRequestFailed { status, url } => AddressLookupError::Network {
            message: format!("API request failed with status {status}: {url}"),
        },
        JusoError::InvalidResponse { message } => AddressLookupError::InvalidResponse { message },
        JusoError::Service { code, message } => AddressLookupError::Service { code, message },
        JusoError::MissingKey => AddressLookupError::Configuration {
            message: "no confmKey configured".to_string(),
        },
        JusoError::Network(e) => AddressLookupError::Network {
            message: e.without_url().to_string(),
        },
        JusoError::InvalidUrl(e) => AddressLookupError::Configuration {
            message: e.to_string(),
        },
        JusoError::JsonParse(e) => AddressLookupError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> AddressLookupPort for JusoClient<B> {
    async fn search(&self, query: &AddressQuery) -> Result<Vec<AddressRecord>, AddressLookupError> {
        self.search_page(query)
            .await
            .map(|page| page.records)
            .map_err(map_error)
    }
}
