// ABOUTME: Generation orchestrator composing the text generator, response repair and fallback synthesis
// ABOUTME: Absorbs every generation failure so callers always receive a contract-conforming result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument, warn};

use crate::config::GenerationConfig;
use crate::errors::GenerationError;
use crate::intelligence::{parse_plan, repair_string_list, FallbackSynthesizer};
use crate::llm::prompts::{motivation_prompt, plan_prompt};
use crate::llm::TextGenerator;
use crate::models::{FitnessPlan, MotivationQuoteSet, PlanRichness, UserProfile};

/// Where a returned value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationSource {
    /// Generator output that repaired and validated cleanly
    Generated,
    /// Rule-based synthesis after the named failure kind
    Fallback {
        /// [`GenerationError::kind`] of the failure that triggered the fallback
        kind: &'static str,
    },
}

impl GenerationSource {
    /// Value for the `x-generation-source` response header
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Fallback { .. } => "fallback",
        }
    }

    /// True when the value was synthesized
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// A result plus its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome<T> {
    /// The value returned to the caller
    pub value: T,
    /// How the value was produced
    pub source: GenerationSource,
}

impl<T> GenerationOutcome<T> {
    const fn generated(value: T) -> Self {
        Self {
            value,
            source: GenerationSource::Generated,
        }
    }

    fn fallback(value: T, cause: &GenerationError) -> Self {
        Self {
            value,
            source: GenerationSource::Fallback { kind: cause.kind() },
        }
    }
}

/// Runs one generation attempt per request and falls back on any failure
///
/// Holds no per-request state; a single instance is shared by all requests.
#[derive(Clone)]
pub struct GenerationOrchestrator {
    generator: Arc<dyn TextGenerator>,
    config: GenerationConfig,
}

impl GenerationOrchestrator {
    /// Create an orchestrator around a generator
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, config: GenerationConfig) -> Self {
        Self { generator, config }
    }

    /// Pin the fallback random source
    #[must_use]
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.config.fallback_seed = Some(seed);
        self
    }

    /// Generation settings in effect
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Name of the wrapped generator
    #[must_use]
    pub fn generator_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Produce a quote set, generated if possible
    #[instrument(skip(self), fields(generator = self.generator.name()))]
    pub async fn generate_quotes(&self) -> GenerationOutcome<MotivationQuoteSet> {
        match self.try_generate_quotes().await {
            Ok(quotes) => {
                info!(quote_count = quotes.len(), "Serving generated quotes");
                GenerationOutcome::generated(MotivationQuoteSet { quotes })
            }
            Err(e) => {
                warn!(error.kind = e.kind(), error = %e, "Quote generation failed, serving fallback quotes");
                GenerationOutcome::fallback(self.synthesizer().synthesize_quotes(), &e)
            }
        }
    }

    /// Produce a plan for `profile`, generated if possible
    ///
    /// A generated plan is only returned when it has exactly the day,
    /// exercise and tip counts `richness` asks for.
    #[instrument(
        skip(self, profile),
        fields(generator = self.generator.name(), richness = ?richness)
    )]
    pub async fn generate_plan(
        &self,
        profile: &UserProfile,
        richness: PlanRichness,
    ) -> GenerationOutcome<FitnessPlan> {
        match self.try_generate_plan(profile, richness).await {
            Ok(plan) => {
                info!(days = plan.workout_plan.len(), "Serving generated plan");
                GenerationOutcome::generated(plan)
            }
            Err(e) => {
                warn!(error.kind = e.kind(), error = %e, "Plan generation failed, serving fallback plan");
                GenerationOutcome::fallback(
                    self.synthesizer().synthesize_plan(profile, richness),
                    &e,
                )
            }
        }
    }

    async fn try_generate_quotes(&self) -> Result<Vec<String>, GenerationError> {
        let text = self
            .generator
            .generate(&motivation_prompt(), self.config.quote_timeout)
            .await?;
        repair_string_list(&text)
    }

    async fn try_generate_plan(
        &self,
        profile: &UserProfile,
        richness: PlanRichness,
    ) -> Result<FitnessPlan, GenerationError> {
        let text = self
            .generator
            .generate(&plan_prompt(profile, richness), self.config.plan_timeout)
            .await?;
        parse_plan(&text, richness)
    }

    fn synthesizer(&self) -> FallbackSynthesizer<ChaCha8Rng> {
        self.config
            .fallback_seed
            .map_or_else(FallbackSynthesizer::from_entropy, FallbackSynthesizer::from_seed)
    }
}
