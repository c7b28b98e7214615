//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Database pool and repositories (via skycast-db)
//! - weather.gov and Nominatim clients (via skycast-net)
//! - Core services (via skycast-core)
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use skycast_core::{AppCore, Repos, Services, resolve_database_path};
use skycast_db::{CoreFactory, setup_database};
use skycast_net::{DefaultGeocoder, DefaultNwsClient, NetConfig};
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Network client configuration. The contact address is filled in
    /// from stored settings during [`bootstrap`].
    pub net: NetConfig,
}

impl CliConfig {
    /// Build config from the parsed global options.
    ///
    /// clap has already folded `SKYCAST_NWS_URL` and `SKYCAST_GEOCODER_URL`
    /// into the URL options.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let database_path = resolve_database_path(cli.database.as_deref())?;

        let mut net = NetConfig::new();
        if let Some(ref url) = cli.nws_url {
            net = net.with_nws_base_url(url.as_str());
        }
        if let Some(ref url) = cli.geocoder_url {
            net = net.with_geocoder_base_url(url.as_str());
        }

        Ok(Self { database_path, net })
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Opens the database (creating it if needed) and builds repositories
/// 2. Reads the stored contact address for the User-Agent header
/// 3. Creates the weather.gov and Nominatim clients
/// 4. Assembles the `AppCore`
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    debug!(path = %config.database_path.display(), "Opening database");
    let pool = setup_database(&config.database_path).await?;
    let repos = CoreFactory::build_repos(pool);

    let settings = repos
        .settings
        .load()
        .await
        .context("Failed to load settings")?;
    let net = config.net.with_contact(settings.contact_email);

    let geocoder = DefaultGeocoder::new(&net).context("Failed to create geocoder client")?;
    let nws = DefaultNwsClient::new(&net).context("Failed to create weather.gov client")?;
    let services = Services::new(Arc::new(geocoder), Arc::new(nws));

    Ok(bootstrap_with(repos, services))
}

/// Compose a context from already-built repositories and network ports.
///
/// Used by [`bootstrap`] and by tests that substitute in-memory adapters.
pub fn bootstrap_with(repos: Repos, services: Services) -> CliContext {
    CliContext {
        app: AppCore::new(repos, services),
    }
}
