// ABOUTME: Text generation gateway abstraction for pluggable LLM backends
// ABOUTME: Defines the prompt-in, raw-text-out contract with per-call timeout and cancellation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Generation Gateway
//!
//! The generator is treated as an opaque function: a prompt goes in, raw
//! text (or a failure) comes out. Nothing about the response shape is
//! guaranteed; turning the text into data is the job of
//! [`crate::intelligence::json_repair`].
//!
//! ## Contract
//!
//! - Exactly one outbound call per `generate`; no retries
//! - When a timeout is given the in-flight call is dropped on expiry, which
//!   cancels it and releases its connection, and `GatewayTimeout` is returned
//! - Non-success status or transport failure yields `GatewayUnavailable`
//! - No state is kept between calls
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use pierre_planner::llm::{PollinationsProvider, TextGenerator};
//!
//! async fn example() {
//!     let provider = PollinationsProvider::new("https://text.pollinations.ai");
//!     let text = provider
//!         .generate("Say hello as a JSON array", Some(Duration::from_secs(15)))
//!         .await;
//!     println!("{text:?}");
//! }
//! ```

mod pollinations;
pub mod prompts;

pub use pollinations::PollinationsProvider;

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::GenerationError;

/// A text generator reachable over the network
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Unique provider identifier used in logs
    fn name(&self) -> &'static str;

    /// Send one prompt and return the raw response text
    ///
    /// # Errors
    ///
    /// Returns `GatewayTimeout` if `timeout` expires before the full body
    /// arrives, or `GatewayUnavailable` for transport and status failures
    async fn generate(
        &self,
        prompt: &str,
        timeout: Option<Duration>,
    ) -> Result<String, GenerationError>;
}
