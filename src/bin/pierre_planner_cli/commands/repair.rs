// ABOUTME: Repair command for pierre-planner-cli
// ABOUTME: Replays captured generator output through repair and optional plan validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use pierre_planner::errors::AppResult;
use pierre_planner::intelligence::{repair_and_parse, validate_plan, ExpectedShape};
use pierre_planner::models::PlanRichness;
use tracing::debug;

use super::{print_json, read_input};

/// Repair the text stored at `path` and print the recovered value
///
/// Fails with the repair or validation error so captured responses that
/// would trigger a fallback are easy to spot.
pub fn run(path: &Path, shape: ExpectedShape, as_plan: bool, regenerate: bool) -> AppResult<()> {
    let raw = read_input(path)?;
    debug!(chars = raw.len(), %shape, "Repairing captured response");

    let value = repair_and_parse(&raw, shape)?;
    if as_plan {
        let plan = validate_plan(value, PlanRichness::from_regenerate(regenerate))?;
        return print_json(&plan, None);
    }
    print_json(&value, None)
}
