// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-only configuration for HTTP, generation gateway and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pierre Planner
//!
//! All settings come from environment variables; there is no configuration
//! file. See [`environment::ServerConfig::from_env`] for the recognised keys.

/// Environment and server configuration
pub mod environment;

pub use environment::{CorsConfig, GenerationConfig, ServerConfig};
