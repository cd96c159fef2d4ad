// ABOUTME: Environment-based server configuration for the plan generator
// ABOUTME: Parses ports, generator URL, per-call timeouts, fallback seed and CORS origins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::constants::generation::{
    DEFAULT_PLAN_TIMEOUT_SECS, DEFAULT_QUOTE_TIMEOUT_SECS, DEFAULT_TEXT_GENERATION_URL,
};
use crate::constants::ports::DEFAULT_HTTP_PORT;
use crate::errors::{AppError, AppResult};

/// Text generation gateway settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Base URL the percent-encoded prompt is appended to
    pub base_url: String,
    /// Bound on the quote call (`None` = unbounded)
    pub quote_timeout: Option<Duration>,
    /// Bound on the plan call (`None` = unbounded)
    pub plan_timeout: Option<Duration>,
    /// Pins the fallback random source; unset means a fresh seed per call
    pub fallback_seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TEXT_GENERATION_URL.to_owned(),
            quote_timeout: Some(Duration::from_secs(DEFAULT_QUOTE_TIMEOUT_SECS)),
            plan_timeout: Some(Duration::from_secs(DEFAULT_PLAN_TIMEOUT_SECS)),
            fallback_seed: None,
        }
    }
}

/// Cross-origin settings for the web client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Generation gateway settings
    pub generation: GenerationConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            http_port: DEFAULT_HTTP_PORT,
            generation: GenerationConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `127.0.0.1` |
    /// | `HTTP_PORT` | `8081` |
    /// | `PIERRE_TEXT_GENERATION_URL` | `https://text.pollinations.ai` |
    /// | `PIERRE_QUOTE_TIMEOUT_SECS` | `15` (`0` disables) |
    /// | `PIERRE_PLAN_TIMEOUT_SECS` | `60` (`0` disables) |
    /// | `PIERRE_FALLBACK_SEED` | unset |
    /// | `CORS_ALLOWED_ORIGINS` | `*` |
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a numeric variable cannot be parsed
    /// or the generator URL is not an http(s) URL
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let base_url = env_var_or("PIERRE_TEXT_GENERATION_URL", DEFAULT_TEXT_GENERATION_URL);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "PIERRE_TEXT_GENERATION_URL must be an http(s) URL, got {base_url:?}"
            )));
        }

        Ok(Self {
            host: env_var_or("HOST", "127.0.0.1"),
            http_port: parse_env("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            generation: GenerationConfig {
                base_url,
                quote_timeout: timeout_from_secs(parse_env(
                    "PIERRE_QUOTE_TIMEOUT_SECS",
                    DEFAULT_QUOTE_TIMEOUT_SECS,
                )?),
                plan_timeout: timeout_from_secs(parse_env(
                    "PIERRE_PLAN_TIMEOUT_SECS",
                    DEFAULT_PLAN_TIMEOUT_SECS,
                )?),
                fallback_seed: parse_optional_env("PIERRE_FALLBACK_SEED")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
        })
    }

    /// Address string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Planner Configuration:\n\
             - HTTP: {}\n\
             - Text Generator: {}\n\
             - Quote Timeout: {}\n\
             - Plan Timeout: {}\n\
             - Fallback Seed: {}\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.generation.base_url,
            describe_timeout(self.generation.quote_timeout),
            describe_timeout(self.generation.plan_timeout),
            self.generation
                .fallback_seed
                .map_or_else(|| "random per call".to_owned(), |seed| seed.to_string()),
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    parse_optional_env(key).map(|value| value.unwrap_or(default))
}

fn parse_optional_env<T: FromStr>(key: &str) -> AppResult<Option<T>> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::config(format!("Invalid {key} value: {raw:?}"))),
        _ => Ok(None),
    }
}

/// `0` disables the bound
fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn describe_timeout(timeout: Option<Duration>) -> String {
    timeout.map_or_else(
        || "unbounded".to_owned(),
        |duration| format!("{}s", duration.as_secs()),
    )
}
