//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use juso_core::{AddressLookupError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error (missing API key, bad URL).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Settings could not be saved.
    #[error("Settings error: {0}")]
    Settings(String),

    /// The address service failed.
    #[error("Search failed: {0}")]
    Lookup(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid arguments (reported by clap before this type exists)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Lookup(_) => 69,   // EX_UNAVAILABLE
            Self::Settings(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err.to_string())
    }
}

impl From<AddressLookupError> for CliError {
    fn from(err: AddressLookupError) -> Self {
        match err {
            AddressLookupError::Configuration { message } => Self::Config(message),
            other => Self::Lookup(other.to_string()),
        }
    }
}
