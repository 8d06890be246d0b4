//! Error types for juso.go.kr operations.
//!
//! Search errors are mapped to `AddressLookupError` at the port boundary;
//! only client construction surfaces these directly.

use thiserror::Error;

/// Result type alias for juso.go.kr operations.
pub type JusoResult<T> = Result<T, JusoError>;

/// Errors related to the juso.go.kr API.
#[derive(Debug, Error)]
pub enum JusoError {
    /// API request failed with an HTTP error status.
    #[error("Address API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested, without its query string
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from address API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The API answered with a non-zero `errorCode`.
    #[error("Address API error {code}: {message}")]
    Service {
        /// `results.common.errorCode`
        code: String,
        /// `results.common.errorMessage`
        message: String,
    },

    /// No approval key was configured.
    #[error("No confmKey configured for the address API")]
    MissingKey,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
