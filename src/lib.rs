// ABOUTME: Main library entry point for the Pierre plan generator
// ABOUTME: Turns noisy LLM output into typed fitness plans with deterministic fallback synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Planner
//!
//! An HTTP service that asks an external text generator for a personalised
//! weekly fitness plan (or a handful of motivation quotes) and converts the
//! free-form answer into strictly typed data.
//!
//! ## Features
//!
//! - **Response repair**: ordered normalization passes recover JSON from prose,
//!   markdown fences, trailing commas and single-quoted keys
//! - **Plan contract**: repaired plans are checked for exact day, exercise and tip counts
//! - **Fallback synthesis**: a rule-driven plan or quote set is built from static
//!   tables whenever generation or repair fails, so callers always get a usable result
//! - **Bounded calls**: every outbound generation call is cancelled after its timeout
//!
//! ## Architecture
//!
//! - **llm**: Text generation gateway and prompt builders
//! - **intelligence**: Response repair, plan validation and fallback synthesis
//! - **services**: Generation orchestrator composing the pipeline
//! - **routes**: Axum HTTP handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_planner::config::environment::ServerConfig;
//! use pierre_planner::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Pierre Planner configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration loaded from the environment
pub mod config;

/// Application constants and configuration values
pub mod constants;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Response repair, plan validation and fallback synthesis
pub mod intelligence;

/// Text generation gateway abstraction and providers
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware configuration
pub mod middleware;

/// Common data models for profiles and plans
pub mod models;

/// `HTTP` routes for plan, motivation and health endpoints
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Domain service layer composing generation and fallback
pub mod services;
