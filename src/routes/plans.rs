// ABOUTME: Route handler for fitness plan generation
// ABOUTME: Decodes a wrapped or bare profile, then returns a generated or synthesized plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan routes
//!
//! The body is read as raw bytes and decoded by [`PlanRequest`] so that
//! malformed input is reported with the service's own error body rather
//! than the framework's plain-text rejection.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::post;
use axum::Router;
use tracing::debug;

use super::generation_response;
use crate::constants::endpoints;
use crate::errors::AppError;
use crate::models::PlanRequest;
use crate::server::ServerResources;

/// Plan routes implementation
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan generation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::GENERATE_PLAN, post(Self::handle_generate))
            .with_state(resources)
    }

    /// Handle POST /api/generate-plan
    async fn handle_generate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let body = body.map_err(Self::body_error)?;
        let request = PlanRequest::from_json_bytes(&body)?;
        debug!(
            goal = %request.profile.fitness_goal,
            location = %request.profile.workout_location,
            regenerate = request.is_regenerate,
            "Plan requested"
        );

        let outcome = resources
            .orchestrator
            .generate_plan(&request.profile, request.richness())
            .await;
        Ok(generation_response(outcome))
    }

    /// Body read failures keep the JSON error shape; only the size limit is not a 400
    fn body_error(rejection: BytesRejection) -> AppError {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large(rejection.body_text())
        } else {
            AppError::invalid_format(rejection.body_text())
        }
    }
}
