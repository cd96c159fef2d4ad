// ABOUTME: Prompt builders for plan and motivation generation
// ABOUTME: Embeds the target JSON layout and the exact size contract into each prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generation Prompts
//!
//! The plan layout example is loaded at compile time from `plan_example.json`
//! so it can be edited without touching code.

use std::fmt::Write;

use crate::constants::plan_contract::{DAYS_PER_PLAN, QUOTES_REQUESTED};
use crate::models::{PlanRichness, UserProfile};

/// Single-line example of the plan JSON layout shown to the generator
pub const PLAN_EXAMPLE_JSON: &str = include_str!("plan_example.json");

/// Build the motivation quote prompt
#[must_use]
pub fn motivation_prompt() -> String {
    format!(
        "Generate {QUOTES_REQUESTED} unique fitness motivation quotes. Short, powerful, 1 sentence each. \
         Return ONLY a JSON array: [\"quote1\",\"quote2\",\"quote3\"]"
    )
}

/// Build the plan prompt for a profile and richness
///
/// Optional profile fields are only mentioned when present.
#[must_use]
pub fn plan_prompt(profile: &UserProfile, richness: PlanRichness) -> String {
    let mut prompt = format!(
        "Generate a fitness plan JSON for:\n\
         Name: {}, Age: {}, Gender: {}, Height: {} cm, Weight: {} kg, Goal: {}, Level: {}, Location: {}, Diet: {}",
        profile.name,
        profile.age,
        profile.gender.as_str(),
        profile.height,
        profile.weight,
        profile.fitness_goal,
        profile.fitness_level,
        profile.workout_location,
        profile.dietary_preference,
    );

    if let Some(stress) = profile.stress_level {
        let _ = write!(prompt, ", Stress: {}", stress.as_str());
    }
    if let Some(sleep) = profile.sleep_hours {
        let _ = write!(prompt, ", Sleep: {sleep} hours");
    }
    if let Some(notes) = profile.medical_notes() {
        let _ = write!(prompt, "\nMedical history (keep exercises safe for this): {notes}");
    }

    let exercises = richness.exercises_per_day();
    let tips = richness.tip_count();
    let _ = write!(
        prompt,
        "\n\nReturn ONLY this JSON structure (no other text):\n{}\n\n\
         Create {DAYS_PER_PLAN} days with {exercises} exercises each and exactly {tips} tips. \
         Make it specific to their profile. Diet should be {}. Output ONLY valid JSON.",
        PLAN_EXAMPLE_JSON.trim_end(),
        profile.dietary_preference,
    );

    prompt
}
