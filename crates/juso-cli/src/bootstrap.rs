//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Host detection and the settings store (via juso-store)
//! - The address API client (via juso-api)
//! - Core services (via juso-core)
//!
//! Command handlers receive the fully-composed `CliContext`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use juso_api::{DefaultJusoClient, JusoClientConfig};
use juso_core::{
    AddressLookupPort, AddressManager, HostContext, SettingsDocument, SettingsManager,
    resolve_database_path,
};
use juso_store::StoreFactory;
use tracing::{debug, warn};

use crate::parser::Cli;
use crate::sink::TerminalCacheSink;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Approval key for the address API.
    pub confm_key: Option<String>,
    /// Settings database override (`--db` / `JUSO_DB_PATH`).
    pub db_path: Option<String>,
    /// Run as a page host with no store.
    pub ephemeral: bool,
}

impl CliConfig {
    /// Take the global options from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            confm_key: cli.confm_key.clone(),
            db_path: cli.db.clone(),
            ephemeral: cli.ephemeral,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Settings mirror, loaded once per process.
    pub settings: Arc<SettingsManager<SettingsDocument>>,
    /// Search service; caches results through `settings`.
    pub address: AddressManager,
    /// Where settings live, when this host has a store.
    pub db_path: Option<PathBuf>,
}

impl CliContext {
    /// Access the settings manager.
    pub const fn settings(&self) -> &Arc<SettingsManager<SettingsDocument>> {
        &self.settings
    }

    /// Access the address manager.
    pub const fn address(&self) -> &AddressManager {
        &self.address
    }

    /// The host the services were built for.
    pub fn host(&self) -> &HostContext {
        self.settings.host()
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Detects the host: extension mode with a `SQLite` store, or page mode
/// 2. Creates the address API client
/// 3. Assembles the core services
///
/// A store that cannot be opened is not fatal; the CLI continues in page
/// mode, where nothing is loaded or saved.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    // 1. Host detection
    let (host, db_path) = detect_host(&config).await?;

    // 2. Address API client
    let client_config = JusoClientConfig::new().with_optional_confm_key(config.confm_key);
    let lookup: Arc<dyn AddressLookupPort> = Arc::new(DefaultJusoClient::new(&client_config)?);

    // 3. Core services
    Ok(compose(host, lookup, db_path).await)
}

/// Build the services for an already-detected host.
///
/// Waits for the settings load, so the returned context is ready.
pub async fn compose(
    host: HostContext,
    lookup: Arc<dyn AddressLookupPort>,
    db_path: Option<PathBuf>,
) -> CliContext {
    let settings = SettingsManager::open(host).await;
    let address =
        AddressManager::new(lookup, Arc::clone(&settings)).with_cache_sink(Arc::new(TerminalCacheSink));

    CliContext {
        settings,
        address,
        db_path,
    }
}

async fn detect_host(config: &CliConfig) -> Result<(HostContext, Option<PathBuf>)> {
    if config.ephemeral {
        debug!("Running in page mode (--ephemeral)");
        return Ok((HostContext::Page, None));
    }

    let db_path = resolve_database_path(config.db_path.as_deref())?;
    match StoreFactory::open_sqlite(&db_path).await {
        Ok(store) => {
            debug!(path = %db_path.display(), "Running in extension mode");
            Ok((HostContext::extension(store), Some(db_path)))
        }
        Err(e) => {
            warn!(path = %db_path.display(), error = %e, "Settings store unavailable, running in page mode");
            Ok((HostContext::Page, None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juso_core::RuntimeKind;

    #[tokio::test]
    async fn test_ephemeral_is_page_mode() {
        let config = CliConfig {
            ephemeral: true,
            ..CliConfig::default()
        };
        let (host, db_path) = detect_host(&config).await.unwrap();
        assert_eq!(host.runtime(), RuntimeKind::Page);
        assert!(db_path.is_none());
    }

    #[tokio::test]
    async fn test_db_override_is_extension_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("juso.db");
        let config = CliConfig {
            db_path: Some(path.to_string_lossy().to_string()),
            ..CliConfig::default()
        };

        let (host, db_path) = detect_host(&config).await.unwrap();
        assert_eq!(host.runtime(), RuntimeKind::Extension);
        assert_eq!(db_path, Some(path.clone()));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_bootstrap_without_key_still_builds() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig {
            db_path: Some(dir.path().join("juso.db").to_string_lossy().to_string()),
            ..CliConfig::default()
        };

        let ctx = bootstrap(config).await.unwrap();
        assert!(ctx.settings().is_ready());
        assert!(ctx.host().has_store());
    }
}
