//! Main commands enum and subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Subcommand, ValueEnum};
use juso_core::DisplayField;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search for an address and remember the results
    Search {
        /// Search keyword, e.g. "강남대로" or "자양동" (multiple words are joined)
        #[arg(required = true, num_args = 1..)]
        keyword: Vec<String>,
        /// Result page to fetch
        #[arg(long, default_value = "1")]
        page: String,
        /// Results per page (1-100)
        #[arg(long, default_value = "20")]
        count: String,
    },

    /// Show the results of the last search
    Show,

    /// Turn one address form on or off in result lists
    Toggle {
        /// Which address form to flip
        #[arg(value_enum)]
        field: ToggleField,
    },

    /// Inspect the persisted settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

impl Commands {
    /// The search keyword as typed, words joined with single spaces.
    pub fn join_keyword(words: &[String]) -> String {
        words.join(" ")
    }
}

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Print the full settings document as JSON
    Show,
    /// Print where settings are stored
    Path,
}

/// Toggleable address forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToggleField {
    /// English address (영문주소)
    Eng,
    /// Road-name address (도로명주소)
    Road,
    /// Lot-number address (지번주소)
    Legacy,
}

impl From<ToggleField> for DisplayField {
    fn from(field: ToggleField) -> Self {
        match field {
            ToggleField::Eng => Self::Eng,
            ToggleField::Road => Self::Road,
            ToggleField::Legacy => Self::Legacy,
        }
    }
}
