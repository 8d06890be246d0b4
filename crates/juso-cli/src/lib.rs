//! Terminal front-end for juso.
//!
//! `bootstrap` is the composition root: it decides which host this process
//! runs as, opens the settings store and the address API client, and hands
//! handlers a ready [`CliContext`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod sink;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, compose};
pub use commands::{Commands, SettingsCommand, ToggleField};
pub use error::CliError;
pub use parser::Cli;
