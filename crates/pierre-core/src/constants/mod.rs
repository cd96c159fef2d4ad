// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for plan contracts, endpoints, ports and generation timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// Plan generation endpoint
    pub const GENERATE_PLAN: &str = "/api/generate-plan";
    /// Motivation quote endpoint
    pub const GENERATE_MOTIVATION: &str = "/api/generate-motivation";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service names for structured logging
pub mod service_names {
    /// Plan generation server
    pub const PIERRE_PLANNER_SERVER: &str = "pierre-planner-server";
    /// Name recorded for the Pollinations text generator
    pub const POLLINATIONS: &str = "pollinations";
}

/// Shape of a fitness plan
pub mod plan_contract {
    /// Workout days in every plan
    pub const DAYS_PER_PLAN: usize = 7;
    /// Exercises per day for a first generation
    pub const STANDARD_EXERCISES_PER_DAY: usize = 4;
    /// Exercises per day when the user asks to regenerate
    pub const HIGH_EXERCISES_PER_DAY: usize = 6;
    /// Tips for a first generation
    pub const STANDARD_TIP_COUNT: usize = 5;
    /// Tips when the user asks to regenerate
    pub const HIGH_TIP_COUNT: usize = 8;
    /// Quotes requested from the generator
    pub const QUOTES_REQUESTED: usize = 3;
    /// Sleep hours assumed when the profile does not say
    pub const DEFAULT_SLEEP_HOURS: f64 = 7.0;
}

/// Text generation gateway settings
pub mod generation {
    /// Default base URL of the external text generator
    pub const DEFAULT_TEXT_GENERATION_URL: &str = "https://text.pollinations.ai";
    /// Default bound on the quote generation call
    pub const DEFAULT_QUOTE_TIMEOUT_SECS: u64 = 15;
    /// Default bound on the plan generation call
    pub const DEFAULT_PLAN_TIMEOUT_SECS: u64 = 60;
    /// Connection timeout for the shared HTTP client
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// HTTP request limits
pub mod limits {
    /// Maximum accepted request body size
    pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
}

/// Response headers added by the generation routes
pub mod headers {
    /// Whether the body came from the generator or from fallback synthesis
    pub const GENERATION_SOURCE: &str = "x-generation-source";
}
