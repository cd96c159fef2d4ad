// ABOUTME: Plan command for pierre-planner-cli
// ABOUTME: Decodes a profile file and prints a generated or synthesized plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_planner::errors::AppResult;
use pierre_planner::intelligence::FallbackSynthesizer;
use pierre_planner::models::{PlanRequest, PlanRichness};
use tracing::info;

use super::{online_orchestrator, print_json, read_input};

/// Produce a plan for the profile stored at `path`
///
/// `--regenerate` upgrades the richness even when the file does not set
/// `isRegenerate`.
pub async fn run(path: &Path, regenerate: bool, offline: bool, seed: Option<u64>) -> AppResult<()> {
    let request = PlanRequest::from_json_bytes(read_input(path)?.as_bytes())?;
    let richness = if regenerate {
        PlanRichness::High
    } else {
        request.richness()
    };
    info!(?richness, offline, "Building plan for {}", request.profile.name);

    if offline {
        let mut synthesizer =
            seed.map_or_else(FallbackSynthesizer::from_entropy, FallbackSynthesizer::from_seed);
        let plan = synthesizer.synthesize_plan(&request.profile, richness);
        return print_json(&plan, None);
    }

    let outcome = online_orchestrator(seed)?
        .generate_plan(&request.profile, richness)
        .await;
    print_json(&outcome.value, Some(outcome.source))
}
