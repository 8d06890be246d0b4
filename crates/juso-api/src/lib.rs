//! Client for the juso.go.kr road-name address search API.
//!
//! [`DefaultJusoClient`] implements `juso_core::AddressLookupPort`, so
//! front-ends hand it to `AddressManager` as an `Arc<dyn AddressLookupPort>`
//! and never see the wire format.
//!
//! ```no_run
//! use juso_api::{DefaultJusoClient, JusoClientConfig};
//!
//! # fn example() -> Result<(), juso_api::JusoError> {
//! let config = JusoClientConfig::new().with_confm_key("devU01TX0FVVEgy...");
//! let client = DefaultJusoClient::new(&config)?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// Allow private types in public type alias - DefaultJusoClient is meant to be used
// through the AddressLookupPort trait, not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultJusoClient;

// Configuration
pub use config::{DEFAULT_BASE_URL, JusoClientConfig};

// Errors raised while building the client
pub use error::{JusoError, JusoResult};
