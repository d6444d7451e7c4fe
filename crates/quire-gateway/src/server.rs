// SPDX-FileCopyrightText: 2026 Quire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use quire_auth::TokenExchange;
use quire_core::QuireError;
use quire_core::traits::PostCollection;
use quire_plugin::PluginRegistry;
use quire_publication::{CategoryCache, Publication};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::auth_middleware;
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The publication resolved at startup.
    pub publication: Arc<Publication>,
    /// Registered plugins, read-only after startup.
    pub registry: Arc<PluginRegistry>,
    /// Remote category lists keyed by source URL.
    pub categories: Arc<CategoryCache>,
    /// Time-ordered posts served by `q=source`.
    pub posts: Arc<dyn PostCollection>,
    /// Code-for-token exchange; its signer also verifies bearer tokens.
    pub exchange: TokenExchange,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("publication", &self.publication)
            .field("registry", &self.registry)
            .field("exchange", &self.exchange)
            .finish_non_exhaustive()
    }
}

/// Listener address.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Builds the gateway router.
///
/// - GET /health (public)
/// - POST /token (public, the code is the credential)
/// - GET /micropub (bearer token)
pub fn router(state: GatewayState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .route("/token", post(handlers::post_token))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/micropub", get(handlers::get_micropub))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds to `host:port` and serves the gateway until the process exits.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), QuireError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| QuireError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| QuireError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
