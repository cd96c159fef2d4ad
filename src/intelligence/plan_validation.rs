// ABOUTME: Decodes repaired plan objects into FitnessPlan and enforces the requested size contract
// ABOUTME: Any decoding or contract failure is reported so the caller can fall back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

use super::json_repair::{repair_and_parse, ExpectedShape};
use crate::errors::GenerationError;
use crate::models::{FitnessPlan, PlanRichness};

/// Decode a repaired object and check it against `richness`
///
/// # Errors
///
/// Returns [`GenerationError::ContractViolation`] if a field is missing or
/// mistyped, or if any day, exercise or tip count differs from the contract
pub fn validate_plan(value: Value, richness: PlanRichness) -> Result<FitnessPlan, GenerationError> {
    let plan: FitnessPlan = serde_json::from_value(value)
        .map_err(|e| GenerationError::contract(format!("plan does not match schema: {e}")))?;
    plan.validate_contract(richness)?;
    Ok(plan)
}

/// Repair raw generator text and validate the plan it contains
///
/// # Errors
///
/// Returns [`GenerationError::Parse`] when no object can be recovered and
/// [`GenerationError::ContractViolation`] when the object is not a full plan
pub fn parse_plan(raw: &str, richness: PlanRichness) -> Result<FitnessPlan, GenerationError> {
    let value = repair_and_parse(raw, ExpectedShape::Object)?;
    validate_plan(value, richness)
}
