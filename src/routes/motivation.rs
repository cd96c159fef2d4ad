// ABOUTME: Route handler for motivation quote generation
// ABOUTME: Always answers 200 with a quote list, generated or synthesized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use super::generation_response;
use crate::constants::endpoints;
use crate::server::ServerResources;

/// Motivation routes implementation
pub struct MotivationRoutes;

impl MotivationRoutes {
    /// Create the motivation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::GENERATE_MOTIVATION, get(Self::handle_generate))
            .with_state(resources)
    }

    /// Handle GET /api/generate-motivation
    async fn handle_generate(State(resources): State<Arc<ServerResources>>) -> Response {
        generation_response(resources.orchestrator.generate_quotes().await)
    }
}
