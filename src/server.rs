// ABOUTME: HTTP server assembly: shared resources, router with middleware layers, and serve loop
// ABOUTME: Wires the generation orchestrator into routes and shuts down cleanly on Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server
//!
//! Layer order, outermost first: request id assignment, HTTP tracing,
//! request id propagation, CORS, then the routes. The body size limit is
//! enforced by the body extractor so oversized requests get a JSON error.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use http::HeaderName;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::constants::limits::MAX_REQUEST_BODY_BYTES;
use crate::llm::{PollinationsProvider, TextGenerator};
use crate::middleware::{create_request_span, setup_cors, REQUEST_ID_HEADER};
use crate::routes::{HealthRoutes, MotivationRoutes, PlanRoutes};
use crate::services::GenerationOrchestrator;

/// Process-wide state shared by every handler
///
/// Immutable after construction; requests never write to it.
pub struct ServerResources {
    /// Configuration the server was started with
    pub config: Arc<ServerConfig>,
    /// Generation pipeline
    pub orchestrator: GenerationOrchestrator,
}

impl ServerResources {
    /// Resources backed by the configured Pollinations endpoint
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let generator = Arc::new(PollinationsProvider::new(
            config.generation.base_url.clone(),
        ));
        Self::with_generator(config, generator)
    }

    /// Resources backed by an arbitrary generator
    #[must_use]
    pub fn with_generator(config: ServerConfig, generator: Arc<dyn TextGenerator>) -> Self {
        let orchestrator = GenerationOrchestrator::new(generator, config.generation.clone());
        Self {
            config: Arc::new(config),
            orchestrator,
        }
    }
}

/// Build the complete router with all middleware layers
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(PlanRoutes::routes(Arc::clone(&resources)))
        .merge(MotivationRoutes::routes(Arc::clone(&resources)))
        .merge(HealthRoutes::routes(resources))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

/// Bind the configured address and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let address = config.bind_address();
    let resources = Arc::new(ServerResources::new(config));
    let app = build_router(resources);

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("HTTP server listening on http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => warn!("Failed to listen for shutdown signal: {e}"),
    }
}
