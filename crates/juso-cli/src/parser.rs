//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for Korean road-name address search.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "juso")]
#[command(about = "Search Korean postal addresses (도로명주소 검색)")]
#[command(version)]
pub struct Cli {
    /// Approval key for the juso.go.kr search API
    #[arg(long = "confm-key", env = "JUSO_CONFM_KEY", global = true, hide_env_values = true)]
    pub confm_key: Option<String>,

    /// Override the settings database path for this invocation
    #[arg(long = "db", env = "JUSO_DB_PATH", global = true)]
    pub db: Option<String>,

    /// Run without a settings store: nothing is loaded or saved
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
