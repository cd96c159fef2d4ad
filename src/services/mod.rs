// ABOUTME: Domain service layer for plan and quote generation
// ABOUTME: Provides transport-agnostic orchestration reused by the HTTP routes and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services hold the request-level business rules so the HTTP server and the
//! operator CLI behave identically.

/// Generator call, repair and fallback composition
pub mod generation;

pub use generation::{GenerationOrchestrator, GenerationOutcome, GenerationSource};
