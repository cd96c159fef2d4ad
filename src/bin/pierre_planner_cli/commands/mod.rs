// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for pierre-planner-cli
// ABOUTME: Provides plan, quotes and repair commands plus shared output helpers

pub mod plan;
pub mod quotes;
pub mod repair;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pierre_planner::config::ServerConfig;
use pierre_planner::errors::{AppError, AppResult};
use pierre_planner::llm::PollinationsProvider;
use pierre_planner::services::{GenerationOrchestrator, GenerationSource};
use serde::Serialize;

/// Read a whole input file
pub fn read_input(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("failed to read {}: {e}", path.display())).with_source(e)
    })
}

/// Orchestrator backed by the configured generator endpoint
pub fn online_orchestrator(seed: Option<u64>) -> AppResult<GenerationOrchestrator> {
    let config = ServerConfig::from_env()?;
    let generator = Arc::new(PollinationsProvider::new(
        config.generation.base_url.clone(),
    ));
    let orchestrator = GenerationOrchestrator::new(generator, config.generation);
    Ok(match seed {
        Some(seed) => orchestrator.with_fallback_seed(seed),
        None => orchestrator,
    })
}

/// Print a value as pretty JSON on stdout and its provenance on stderr
pub fn print_json<T: Serialize>(value: &T, source: Option<GenerationSource>) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    if let Some(source) = source {
        match source {
            GenerationSource::Generated => eprintln!("source: generated"),
            GenerationSource::Fallback { kind } => eprintln!("source: fallback ({kind})"),
        }
    }
    Ok(())
}
