// ABOUTME: Route module organization for the plan generator HTTP endpoints
// ABOUTME: Groups plan, motivation and health routes, each built by a XxxRoutes::routes() constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the plan generator
//!
//! Handlers are thin: they decode the request, delegate to
//! [`crate::services::GenerationOrchestrator`] and encode the response.

/// Health check and readiness routes
pub mod health;
/// Motivation quote route
pub mod motivation;
/// Fitness plan route
pub mod plans;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::constants::headers::GENERATION_SOURCE;
use crate::services::GenerationOutcome;

pub use health::HealthRoutes;
pub use motivation::MotivationRoutes;
pub use plans::PlanRoutes;

/// 200 response carrying the value and its `x-generation-source` header
pub(crate) fn generation_response<T: Serialize>(outcome: GenerationOutcome<T>) -> Response {
    (
        StatusCode::OK,
        [(GENERATION_SOURCE, outcome.source.as_str())],
        Json(outcome.value),
    )
        .into_response()
}
