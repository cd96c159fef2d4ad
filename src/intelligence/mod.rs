// ABOUTME: Turns generator output into typed plans and quotes, or synthesizes them from rules
// ABOUTME: Hosts the JSON repair pipeline, plan contract validation and the fallback synthesizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous building blocks used by the generation orchestrator:
//!
//! - [`json_repair`] recovers a JSON value of an expected shape from raw text
//! - [`plan_validation`] decodes a repaired object into a [`FitnessPlan`] and
//!   enforces the day, exercise and tip counts
//! - [`fallback`] builds a complete result from static tables when either of
//!   the above fails
//!
//! [`FitnessPlan`]: crate::models::FitnessPlan

/// Rule-based plan and quote synthesis
pub mod fallback;
/// Ordered text passes that recover JSON from noisy generator output
pub mod json_repair;
/// Full-shape validation for repaired plans
pub mod plan_validation;

pub use fallback::{diet_table_for, DietTable, FallbackSynthesizer};
pub use json_repair::{repair_and_parse, repair_string_list, ExpectedShape};
pub use plan_validation::{parse_plan, validate_plan};
