// ABOUTME: Integration tests for the Pollinations text generator against a local stub server
// ABOUTME: Covers prompt encoding, status failures, timeouts and unreachable endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use pierre_planner::errors::GenerationError;
use pierre_planner::llm::{PollinationsProvider, TextGenerator};
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its base URL
async fn spawn_stub(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}")
}

#[tokio::test]
async fn test_prompt_arrives_decoded_and_body_is_returned() {
    let app = Router::new().route(
        "/*prompt",
        get(|Path(prompt): Path<String>| async move { format!("echo: {prompt}") }),
    );
    let base_url = spawn_stub(app).await;
    let provider = PollinationsProvider::new(base_url);

    let text = provider
        .generate("Return [\"a\", \"b\"] & nothing else?", Some(Duration::from_secs(5)))
        .await
        .unwrap();

    assert_eq!(text, "echo: Return [\"a\", \"b\"] & nothing else?");
}

#[tokio::test]
async fn test_error_status_is_unavailable() {
    let app = Router::new().route(
        "/*prompt",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let provider = PollinationsProvider::new(spawn_stub(app).await);

    let error = provider
        .generate("quotes", Some(Duration::from_secs(5)))
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::GatewayUnavailable { .. }));
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn test_slow_generator_times_out() {
    let app = Router::new().route(
        "/*prompt",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "too late"
        }),
    );
    let provider = PollinationsProvider::new(spawn_stub(app).await);

    let bound = Duration::from_millis(150);
    let error = provider.generate("plan", Some(bound)).await.unwrap_err();

    assert_eq!(error, GenerationError::GatewayTimeout { timeout: bound });
}

#[tokio::test]
async fn test_unbounded_call_waits_for_response() {
    let app = Router::new().route(
        "/*prompt",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            "[\"eventually\"]"
        }),
    );
    let provider = PollinationsProvider::new(spawn_stub(app).await);

    let text = provider.generate("quotes", None).await.unwrap();
    assert_eq!(text, "[\"eventually\"]");
}

#[tokio::test]
async fn test_unreachable_endpoint_is_unavailable() {
    // Bind then drop so the port is known to be closed
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let provider = PollinationsProvider::new(format!("http://{address}"));
    let error = provider
        .generate("quotes", Some(Duration::from_secs(5)))
        .await
        .unwrap_err();

    assert!(matches!(error, GenerationError::GatewayUnavailable { .. }));
}

#[test]
fn test_provider_name() {
    assert_eq!(PollinationsProvider::new("http://localhost").name(), "pollinations");
}
