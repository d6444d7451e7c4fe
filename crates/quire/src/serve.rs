// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quire serve` command implementation.
//!
//! Registers the enabled plugins, resolves the publication against them,
//! sets up the token exchange and serves the gateway.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use quire_auth::{AuthorizationCodeStore, TokenExchange, TokenSigner};
use quire_config::{QuireConfig, TokenConfig};
use quire_core::traits::PluginAdapter;
use quire_core::{HealthStatus, QuireError};
use quire_gateway::{GatewayState, ServerConfig, start_server};
use quire_pagination::MemoryPostCollection;
use quire_plugin::PluginRegistry;
use quire_preset_jekyll::JekyllPreset;
use quire_publication::{CategoryCache, Publication};
use quire_store_github::GithubStore;
use rand::RngCore;
use rand::rngs::OsRng;
use tracing::{info, warn};

/// How often expired authorization codes are swept.
const CODE_PURGE_INTERVAL: Duration = Duration::from_secs(60);

/// Registers every plugin named in `plugins.enabled`, in order.
pub fn build_registry(config: &QuireConfig) -> Result<PluginRegistry, QuireError> {
    let mut registry = PluginRegistry::new();

    for id in &config.plugins.enabled {
        match id.as_str() {
            JekyllPreset::ID => registry.add_preset(Arc::new(JekyllPreset::new()))?,
            GithubStore::ID => registry.add_store(Arc::new(GithubStore::new(&config.github)?))?,
            other => {
                return Err(QuireError::Config(format!(
                    "unknown plugin `{other}` in plugins.enabled"
                )));
            }
        }
    }

    info!(count = registry.len(), "plugin registry initialized");
    Ok(registry)
}

/// Builds the token signer from `token.signing_key`, or a fresh one.
///
/// Tokens signed by a generated key stop verifying when the process exits.
pub fn build_signer(config: &TokenConfig) -> Result<TokenSigner, QuireError> {
    let lifetime = lifetime("token.token_lifetime_secs", config.token_lifetime_secs)?;
    match &config.signing_key {
        Some(seed) => TokenSigner::from_hex(seed, lifetime),
        None => {
            warn!("token.signing_key not set, generating an ephemeral signing key");
            Ok(TokenSigner::generate(lifetime))
        }
    }
}

/// Hex-encoded random 32-byte seed suitable for `token.signing_key`.
pub fn generate_signing_key() -> String {
    let mut seed = [0u8; 32];
    OsRng.fill_bytes(&mut seed);
    hex::encode(seed)
}

fn lifetime(key: &str, secs: u64) -> Result<chrono::Duration, QuireError> {
    i64::try_from(secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .ok_or_else(|| QuireError::Config(format!("{key} is out of range: {secs}")))
}

/// Wires everything the gateway handlers share.
pub fn build_state(
    config: &QuireConfig,
    registry: PluginRegistry,
) -> Result<(GatewayState, Arc<AuthorizationCodeStore>), QuireError> {
    let publication = Publication::resolve(&registry, &config.publication)?;

    let codes = Arc::new(AuthorizationCodeStore::new(lifetime(
        "token.code_lifetime_secs",
        config.token.code_lifetime_secs,
    )?));
    let signer = Arc::new(build_signer(&config.token)?);
    let categories = CategoryCache::new(Duration::from_secs(
        config.publication.categories_cache_ttl_secs,
    ))?;

    let state = GatewayState {
        publication: Arc::new(publication),
        registry: Arc::new(registry),
        categories: Arc::new(categories),
        posts: Arc::new(MemoryPostCollection::new()),
        exchange: TokenExchange::new(Arc::clone(&codes), signer),
        start_time: Instant::now(),
    };
    Ok((state, codes))
}

/// Logs the health of every registered store. Unhealthy stores do not stop startup.
async fn check_stores(registry: &PluginRegistry) {
    for store in registry.stores() {
        match store.health_check().await {
            Ok(HealthStatus::Healthy) => info!(plugin = store.id(), "store healthy"),
            Ok(HealthStatus::Degraded(reason)) => {
                warn!(plugin = store.id(), reason, "store degraded")
            }
            Ok(HealthStatus::Unhealthy(reason)) => {
                warn!(plugin = store.id(), reason, "store unhealthy")
            }
            Err(e) => warn!(plugin = store.id(), error = %e, "store health check failed"),
        }
    }
}

/// Runs the `quire serve` command.
pub async fn run_serve(config: QuireConfig) -> Result<(), QuireError> {
    init_tracing(&config.server.log_level);

    info!("starting quire serve");

    let registry = build_registry(&config)?;
    check_stores(&registry).await;

    let (state, codes) = build_state(&config, registry)?;

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CODE_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = codes.purge_expired(Utc::now());
            if purged > 0 {
                tracing::debug!(purged, "expired authorization codes purged");
            }
        }
    });

    let server = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server, state).await
}

/// Initialize the tracing subscriber with an env filter.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quire={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
