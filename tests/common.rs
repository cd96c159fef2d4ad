// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, sample profiles and a scripted text generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_planner`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use pierre_planner::config::{GenerationConfig, ServerConfig};
use pierre_planner::errors::GenerationError;
use pierre_planner::intelligence::FallbackSynthesizer;
use pierre_planner::llm::TextGenerator;
use pierre_planner::models::{
    DietaryPreference, FitnessGoal, FitnessLevel, Gender, PlanRichness, UserProfile,
    WorkoutLocation,
};
use pierre_planner::server::ServerResources;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A complete beginner profile training at home
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Asha".to_owned(),
        age: 29,
        gender: Gender::Female,
        height: 165.0,
        weight: 61.5,
        fitness_goal: FitnessGoal::WeightLoss,
        fitness_level: FitnessLevel::Beginner,
        workout_location: WorkoutLocation::Home,
        dietary_preference: DietaryPreference::Veg,
        medical_history: None,
        stress_level: None,
        sleep_hours: None,
    }
}

/// Sample profile with location, level and diet overridden
pub fn profile_with(
    location: WorkoutLocation,
    level: FitnessLevel,
    diet: DietaryPreference,
) -> UserProfile {
    UserProfile {
        workout_location: location,
        fitness_level: level,
        dietary_preference: diet,
        ..sample_profile()
    }
}

/// Sample profile as the web client sends it
pub fn sample_profile_json() -> serde_json::Value {
    serde_json::json!({
        "name": "Asha",
        "age": 29,
        "gender": "female",
        "height": 165,
        "weight": 61.5,
        "fitnessGoal": "weight-loss",
        "fitnessLevel": "beginner",
        "workoutLocation": "home",
        "dietaryPreference": "veg"
    })
}

/// Serialized plan that satisfies the contract for `richness`
pub fn valid_plan_json(richness: PlanRichness) -> String {
    let plan = FallbackSynthesizer::from_seed(11).synthesize_plan(&sample_profile(), richness);
    serde_json::to_string(&plan).unwrap()
}

/// What a [`ScriptedGenerator`] does on every call
#[derive(Debug, Clone)]
pub enum Script {
    /// Answer with this text
    Respond(String),
    /// Fail with this error
    Fail(GenerationError),
    /// Sleep this long, then answer, honouring the caller's timeout
    Delay(Duration, String),
}

/// One recorded generator call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub timeout: Option<Duration>,
}

/// Text generator that replays a fixed script and records its calls
#[derive(Debug)]
pub struct ScriptedGenerator {
    script: Script,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedGenerator {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn responding(text: impl Into<String>) -> Arc<Self> {
        Self::new(Script::Respond(text.into()))
    }

    pub fn failing() -> Arc<Self> {
        Self::new(Script::Fail(GenerationError::unavailable(
            "generator returned status 503 Service Unavailable",
        )))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate(
        &self,
        prompt: &str,
        timeout: Option<Duration>,
    ) -> Result<String, GenerationError> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_owned(),
            timeout,
        });

        match &self.script {
            Script::Respond(text) => Ok(text.clone()),
            Script::Fail(error) => Err(error.clone()),
            Script::Delay(delay, text) => match timeout {
                Some(bound) if bound < *delay => {
                    tokio::time::sleep(bound).await;
                    Err(GenerationError::GatewayTimeout { timeout: bound })
                }
                _ => {
                    tokio::time::sleep(*delay).await;
                    Ok(text.clone())
                }
            },
        }
    }
}

/// Generation settings with short timeouts and a pinned fallback seed
pub fn test_generation_config() -> GenerationConfig {
    GenerationConfig {
        base_url: "http://127.0.0.1:9".to_owned(),
        quote_timeout: Some(Duration::from_millis(200)),
        plan_timeout: Some(Duration::from_millis(500)),
        fallback_seed: Some(42),
    }
}

/// Server resources around a scripted generator
pub fn test_resources(generator: Arc<ScriptedGenerator>) -> Arc<ServerResources> {
    init_test_logging();
    let config = ServerConfig {
        generation: test_generation_config(),
        ..ServerConfig::default()
    };
    Arc::new(ServerResources::with_generator(config, generator))
}
