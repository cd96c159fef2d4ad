// ABOUTME: HTTP integration tests for plan, motivation and health routes
// ABOUTME: Drives the full router in-process with scripted generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

//! HTTP integration tests for the generation routes
//!
//! Every test builds the production router, middleware included, around a
//! scripted generator so no network access is needed.

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{sample_profile_json, test_resources, valid_plan_json, ScriptedGenerator};
use helpers::axum_test::AxumTestRequest;
use pierre_planner::models::{FitnessPlan, MotivationQuoteSet, PlanRichness};
use pierre_planner::server::build_router;
use serde_json::{json, Value};

fn failing_app() -> axum::Router {
    build_router(test_resources(ScriptedGenerator::failing()))
}

// ============================================================================
// GET /api/generate-motivation
// ============================================================================

#[tokio::test]
async fn test_motivation_returns_generated_quotes() {
    let app = build_router(test_resources(ScriptedGenerator::responding(
        "[\"Lift.\", \"Rest.\", \"Repeat.\"]",
    )));

    let response = AxumTestRequest::get("/api/generate-motivation")
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.header("x-generation-source").as_deref(), Some("generated"));

    let body: MotivationQuoteSet = response.json();
    assert_eq!(body.quotes, vec!["Lift.", "Rest.", "Repeat."]);
}

#[tokio::test]
async fn test_motivation_falls_back_with_success_status() {
    let response = AxumTestRequest::get("/api/generate-motivation")
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.header("x-generation-source").as_deref(), Some("fallback"));

    let body: Value = response.json();
    assert_eq!(body["quotes"].as_array().unwrap().len(), 3);
}

// ============================================================================
// POST /api/generate-plan
// ============================================================================

#[tokio::test]
async fn test_plan_falls_back_with_success_status() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&json!({ "profile": sample_profile_json(), "isRegenerate": false }))
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.header("x-generation-source").as_deref(), Some("fallback"));

    let plan: FitnessPlan = response.json();
    plan.validate_contract(PlanRichness::Standard).unwrap();
}

#[tokio::test]
async fn test_plan_accepts_bare_profile() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&sample_profile_json())
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);

    let plan: FitnessPlan = response.json();
    assert_eq!(plan.tips.len(), 5);
}

#[tokio::test]
async fn test_regenerate_returns_richer_plan() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&json!({ "profile": sample_profile_json(), "isRegenerate": true }))
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);

    let plan: FitnessPlan = response.json();
    assert!(plan.workout_plan.iter().all(|d| d.exercises.len() == 6));
    assert_eq!(plan.tips.len(), 8);
}

#[tokio::test]
async fn test_string_regenerate_flag_returns_richer_plan() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&json!({ "profile": sample_profile_json(), "isRegenerate": "true" }))
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);

    let plan: FitnessPlan = response.json();
    assert_eq!(plan.tips.len(), 8);
}

#[tokio::test]
async fn test_unrecognised_regenerate_flag_is_a_client_error() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&json!({ "profile": sample_profile_json(), "isRegenerate": "maybe" }))
        .send(failing_app())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_plan_wire_format_is_camel_case() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&sample_profile_json())
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert!(body["workoutPlan"][0]["caloriesBurned"].is_string());
    assert!(body["workoutPlan"][0]["exercises"][0]["restTime"].is_string());
    assert!(body["dietPlan"]["midMorningSnack"]["name"].is_string());
    assert!(body["dietPlan"]["totalCalories"].is_string());
}

#[tokio::test]
async fn test_generated_plan_is_served() {
    let app = build_router(test_resources(ScriptedGenerator::responding(valid_plan_json(
        PlanRichness::Standard,
    ))));

    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&sample_profile_json())
        .send(app)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.header("x-generation-source").as_deref(), Some("generated"));
}

#[tokio::test]
async fn test_malformed_body_is_a_client_error() {
    let response = AxumTestRequest::post("/api/generate-plan")
        .raw_json("{\"profile\": ")
        .send(failing_app())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn test_invalid_profile_is_a_client_error() {
    let mut profile = sample_profile_json();
    profile["age"] = json!(0);

    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&json!({ "profile": profile }))
        .send(failing_app())
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["error"].as_str().unwrap().contains("age"));
}

#[tokio::test]
async fn test_unknown_diet_is_a_client_error() {
    let mut profile = sample_profile_json();
    profile["dietaryPreference"] = json!("carnivore");

    AxumTestRequest::post("/api/generate-plan")
        .json(&profile)
        .send(failing_app())
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_vegetarian_alias_is_accepted() {
    let mut profile = sample_profile_json();
    profile["dietaryPreference"] = json!("vegetarian");

    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&profile)
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);

    let plan: FitnessPlan = response.json();
    assert_eq!(plan.diet_plan.breakfast.name, "Oatmeal with Fruits");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut profile = sample_profile_json();
    profile["medicalHistory"] = json!("x".repeat(70 * 1024));

    let response = AxumTestRequest::post("/api/generate-plan")
        .json(&profile)
        .send(failing_app())
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
}

#[tokio::test]
async fn test_oversized_body_with_content_length_is_rejected() {
    let mut profile = sample_profile_json();
    profile["medicalHistory"] = json!("x".repeat(70 * 1024));
    let body = serde_json::to_string(&profile).unwrap();

    let response = AxumTestRequest::post("/api/generate-plan")
        .header("content-length", &body.len().to_string())
        .raw_json(&body)
        .send(failing_app())
        .await
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE);

    let body: Value = response.json();
    assert!(body["error"].is_string());
    assert_eq!(body["code"], "PAYLOAD_TOO_LARGE");
}

// ============================================================================
// Health and middleware
// ============================================================================

#[tokio::test]
async fn test_health_and_ready() {
    let response = AxumTestRequest::get("/health")
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    let response = AxumTestRequest::get("/ready")
        .send(failing_app())
        .await
        .assert_status(StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["generator"], "scripted");
}

#[tokio::test]
async fn test_request_id_is_assigned_and_propagated() {
    let response = AxumTestRequest::get("/health").send(failing_app()).await;
    assert!(response.header("x-request-id").is_some());

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req-123")
        .send(failing_app())
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("req-123"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let response = AxumTestRequest::get("/api/generate-motivation")
        .header("origin", "https://app.example.com")
        .send(failing_app())
        .await;
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
