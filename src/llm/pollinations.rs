// ABOUTME: Pollinations text generator reached with a single percent-encoded GET request
// ABOUTME: Applies the optional per-call timeout by dropping the in-flight request on expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time;
use tracing::{debug, instrument, warn};

use super::TextGenerator;
use crate::constants::generation::CONNECT_TIMEOUT_SECS;
use crate::constants::service_names;
use crate::errors::GenerationError;

/// Text generator backed by a Pollinations-compatible endpoint
///
/// The endpoint takes the whole prompt as the URL path and answers with
/// plain text. No authentication is involved.
#[derive(Debug, Clone)]
pub struct PollinationsProvider {
    client: Client,
    base_url: String,
}

impl PollinationsProvider {
    /// Create a provider for the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, base_url)
    }

    /// Create a provider that reuses an existing HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Full request URL for a prompt
    #[must_use]
    pub fn request_url(&self, prompt: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(prompt))
    }

    async fn fetch(&self, url: &str) -> Result<String, GenerationError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Text generator request failed: {e}");
            GenerationError::unavailable(format!("request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(http.status = status.as_u16(), "Text generator returned an error status");
            return Err(GenerationError::unavailable(format!(
                "generator returned status {status}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| GenerationError::unavailable(format!("failed to read body: {e}")))
    }
}

#[async_trait]
impl TextGenerator for PollinationsProvider {
    fn name(&self) -> &'static str {
        service_names::POLLINATIONS
    }

    #[instrument(skip(self, prompt), fields(prompt_chars = prompt.len()))]
    async fn generate(
        &self,
        prompt: &str,
        timeout: Option<Duration>,
    ) -> Result<String, GenerationError> {
        let url = self.request_url(prompt);

        let text = match timeout {
            Some(bound) => time::timeout(bound, self.fetch(&url))
                .await
                .map_err(|_| {
                    warn!(timeout_secs = bound.as_secs(), "Text generator call timed out");
                    GenerationError::GatewayTimeout { timeout: bound }
                })??,
            None => self.fetch(&url).await?,
        };

        debug!(response_chars = text.len(), "Text generator responded");
        Ok(text)
    }
}
