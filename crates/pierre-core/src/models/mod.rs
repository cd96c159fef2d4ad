// ABOUTME: Core data models and types for Pierre plan generation
// ABOUTME: Re-exports UserProfile, FitnessPlan, MotivationQuoteSet and their building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every model is created fresh for one request and dropped once the
//! response is written. Wire names are camelCase to match the web client.
//!
//! ## Design Principles
//!
//! - **Lenient in, strict out**: labels coming back from the text generator may
//!   be strings or numbers; they are always stored and emitted as strings
//! - **Contract checked**: plan size rules live next to the types they govern
//!
//! ## Core Models
//!
//! - `UserProfile`: Intake answers that drive prompt building and fallback selection
//! - `FitnessPlan`: Seven workout days, one diet day, tips and a motivation line
//! - `MotivationQuoteSet`: Non-empty list of quotes
//! - `PlanRequest`: Wrapped or bare profile plus the regenerate flag

mod labels;
mod plan;
mod profile;
mod request;

pub use plan::{
    DietDay, Exercise, FitnessPlan, Meal, MotivationQuoteSet, PlanRichness, WorkoutDay,
};
pub use profile::{
    DietaryPreference, FitnessGoal, FitnessLevel, Gender, StressLevel, UserProfile,
    WorkoutLocation,
};
pub use request::PlanRequest;
