// ABOUTME: Quotes command for pierre-planner-cli
// ABOUTME: Prints generated motivation quotes or a built-in quote set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_planner::errors::AppResult;
use pierre_planner::intelligence::FallbackSynthesizer;

use super::{online_orchestrator, print_json};

/// Print one quote set
pub async fn run(offline: bool, seed: Option<u64>) -> AppResult<()> {
    if offline {
        let mut synthesizer =
            seed.map_or_else(FallbackSynthesizer::from_entropy, FallbackSynthesizer::from_seed);
        return print_json(&synthesizer.synthesize_quotes(), None);
    }

    let outcome = online_orchestrator(seed)?.generate_quotes().await;
    print_json(&outcome.value, Some(outcome.source))
}
