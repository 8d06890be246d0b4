//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Wait for the settings mirror when they need it
//!   2. Call the core services
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the store directly
//! - Contain merge or caching logic

pub mod search;
pub mod settings;
pub mod show;
pub mod toggle;
