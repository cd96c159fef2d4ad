// ABOUTME: User profile collected by the intake form and its enumerated answers
// ABOUTME: Provides wire-format enums, display helpers and request-level validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::plan_contract::DEFAULT_SLEEP_HOURS;
use crate::errors::{AppError, AppResult};

/// Gender as reported by the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    /// Reduce body weight
    WeightLoss,
    /// Build muscle mass
    MuscleGain,
    /// Keep current fitness
    Maintenance,
    /// Improve stamina
    Endurance,
    /// Improve mobility
    Flexibility,
}

impl FitnessGoal {
    /// Wire value, e.g. `weight-loss`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight-loss",
            Self::MuscleGain => "muscle-gain",
            Self::Maintenance => "maintenance",
            Self::Endurance => "endurance",
            Self::Flexibility => "flexibility",
        }
    }

    /// Human-readable form with hyphens replaced by spaces, e.g. `weight loss`
    #[must_use]
    pub fn display_name(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current training experience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to training
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced athlete
    Advanced,
}

impl FitnessLevel {
    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the user trains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutLocation {
    /// Bodyweight training at home
    Home,
    /// Equipment available
    Gym,
    /// Parks, tracks and open spaces
    Outdoor,
}

impl WorkoutLocation {
    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gym => "gym",
            Self::Outdoor => "outdoor",
        }
    }
}

impl fmt::Display for WorkoutLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DietaryPreference {
    /// Vegetarian
    #[serde(rename = "veg", alias = "vegetarian")]
    Veg,
    /// Eats meat and fish
    #[serde(rename = "non-veg", alias = "non-vegetarian")]
    NonVeg,
    /// No animal products
    #[serde(rename = "vegan")]
    Vegan,
    /// Low carbohydrate
    #[serde(rename = "keto")]
    Keto,
}

impl DietaryPreference {
    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Veg => "veg",
            Self::NonVeg => "non-veg",
            Self::Vegan => "vegan",
            Self::Keto => "keto",
        }
    }
}

impl fmt::Display for DietaryPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported stress level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Low stress
    Low,
    /// Medium stress
    Medium,
    /// High stress
    High,
}

impl StressLevel {
    /// Wire value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Intake answers for one plan request
///
/// Immutable for the lifetime of a request. Height and weight are metric
/// (`cm` and `kg`); the short wire names are kept for the web client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name used in tips and motivation
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimetres
    #[serde(alias = "heightCm", alias = "height_cm")]
    pub height: f64,
    /// Weight in kilograms
    #[serde(alias = "weightKg", alias = "weight_kg")]
    pub weight: f64,
    /// Primary goal
    pub fitness_goal: FitnessGoal,
    /// Training experience
    pub fitness_level: FitnessLevel,
    /// Training location
    pub workout_location: WorkoutLocation,
    /// Diet preference
    pub dietary_preference: DietaryPreference,
    /// Free-text medical notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    /// Stress level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<StressLevel>,
    /// Average nightly sleep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
}

impl UserProfile {
    /// Check the value rules the type system cannot express
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first offending field
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        if self.age == 0 {
            return Err(AppError::invalid_input("age must be a positive integer"));
        }
        if !is_positive(self.height) {
            return Err(AppError::invalid_input("height must be a positive number"));
        }
        if !is_positive(self.weight) {
            return Err(AppError::invalid_input("weight must be a positive number"));
        }
        if let Some(hours) = self.sleep_hours {
            if !is_positive(hours) {
                return Err(AppError::invalid_input(
                    "sleepHours must be a positive number",
                ));
            }
        }
        Ok(())
    }

    /// Reported sleep, or the default when absent
    #[must_use]
    pub fn sleep_hours_or_default(&self) -> f64 {
        self.sleep_hours.unwrap_or(DEFAULT_SLEEP_HOURS)
    }

    /// Medical notes with surrounding whitespace removed, if any remain
    #[must_use]
    pub fn medical_notes(&self) -> Option<&str> {
        self.medical_history
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
