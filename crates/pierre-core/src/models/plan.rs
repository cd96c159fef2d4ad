// ABOUTME: Fitness plan and motivation quote models with their size contract
// ABOUTME: Exercise, WorkoutDay, Meal, DietDay, FitnessPlan, MotivationQuoteSet and PlanRichness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::labels::{count, label, leading_number, optional_label};
use crate::constants::plan_contract::{
    DAYS_PER_PLAN, HIGH_EXERCISES_PER_DAY, HIGH_TIP_COUNT, STANDARD_EXERCISES_PER_DAY,
    STANDARD_TIP_COUNT,
};
use crate::errors::GenerationError;

/// How much content a plan request asks for
///
/// A regenerate request asks for a richer plan than the first generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanRichness {
    /// First generation: 4 exercises per day, 5 tips
    #[default]
    Standard,
    /// Regeneration: 6 exercises per day, 8 tips
    High,
}

impl PlanRichness {
    /// Map the request's `isRegenerate` flag
    #[must_use]
    pub const fn from_regenerate(is_regenerate: bool) -> Self {
        if is_regenerate {
            Self::High
        } else {
            Self::Standard
        }
    }

    /// Exercises expected in every workout day
    #[must_use]
    pub const fn exercises_per_day(&self) -> usize {
        match self {
            Self::Standard => STANDARD_EXERCISES_PER_DAY,
            Self::High => HIGH_EXERCISES_PER_DAY,
        }
    }

    /// Tips expected in the plan
    #[must_use]
    pub const fn tip_count(&self) -> usize {
        match self {
            Self::Standard => STANDARD_TIP_COUNT,
            Self::High => HIGH_TIP_COUNT,
        }
    }
}

/// One exercise prescription
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    #[serde(deserialize_with = "label")]
    pub name: String,
    /// Number of sets
    #[serde(deserialize_with = "count")]
    pub sets: u32,
    /// Repetitions, or a duration phrase such as `45 seconds`
    #[serde(deserialize_with = "label")]
    pub reps: String,
    /// Rest between sets, e.g. `60s`
    #[serde(deserialize_with = "label")]
    pub rest_time: String,
    /// Coaching cue
    #[serde(
        default,
        deserialize_with = "optional_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

/// One day of the weekly workout schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    /// Day label, e.g. `Day 1`
    #[serde(deserialize_with = "label")]
    pub day: String,
    /// Focus label, e.g. `Legs & Glutes`
    #[serde(deserialize_with = "label")]
    pub focus: String,
    /// Exercises in display order
    pub exercises: Vec<Exercise>,
    /// Duration label, e.g. `45 min`
    #[serde(deserialize_with = "label")]
    pub duration: String,
    /// Calories label, e.g. `350 cal`
    #[serde(deserialize_with = "label")]
    pub calories_burned: String,
}

/// One meal; every nutrient is a free-form label such as `320 cal` or `20g`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meal {
    /// Meal name
    #[serde(deserialize_with = "label")]
    pub name: String,
    /// Short description
    #[serde(deserialize_with = "label")]
    pub description: String,
    /// Calories label
    #[serde(deserialize_with = "label")]
    pub calories: String,
    /// Protein label
    #[serde(deserialize_with = "label")]
    pub protein: String,
    /// Carbohydrates label
    #[serde(deserialize_with = "label")]
    pub carbs: String,
    /// Fats label
    #[serde(deserialize_with = "label")]
    pub fats: String,
}

impl Meal {
    /// Calories parsed from the label, when it starts with a number
    #[must_use]
    pub fn calorie_value(&self) -> Option<u32> {
        leading_number(&self.calories)
    }
}

/// A full day of meals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DietDay {
    /// Breakfast
    pub breakfast: Meal,
    /// Mid-morning snack
    pub mid_morning_snack: Meal,
    /// Lunch
    pub lunch: Meal,
    /// Evening snack
    pub evening_snack: Meal,
    /// Dinner
    pub dinner: Meal,
    /// Daily total label
    #[serde(deserialize_with = "label")]
    pub total_calories: String,
}

impl DietDay {
    /// The five meals in serving order
    #[must_use]
    pub const fn meals(&self) -> [&Meal; 5] {
        [
            &self.breakfast,
            &self.mid_morning_snack,
            &self.lunch,
            &self.evening_snack,
            &self.dinner,
        ]
    }

    /// Sum of parsed meal calories, or `None` if any label is not numeric
    #[must_use]
    pub fn meal_calorie_sum(&self) -> Option<u32> {
        self.meals()
            .iter()
            .map(|meal| meal.calorie_value())
            .sum::<Option<u32>>()
    }
}

/// Weekly workout schedule plus diet, tips and motivation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    /// Exactly seven days
    pub workout_plan: Vec<WorkoutDay>,
    /// One diet day
    pub diet_plan: DietDay,
    /// Five tips, or eight on regeneration
    pub tips: Vec<String>,
    /// One motivation line
    pub motivation: String,
}

impl FitnessPlan {
    /// Check every size and presence rule for the requested richness
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` describing the first rule that fails
    pub fn validate_contract(&self, richness: PlanRichness) -> Result<(), GenerationError> {
        if self.workout_plan.len() != DAYS_PER_PLAN {
            return Err(GenerationError::contract(format!(
                "expected {DAYS_PER_PLAN} workout days, found {}",
                self.workout_plan.len()
            )));
        }

        let expected_exercises = richness.exercises_per_day();
        for (index, day) in self.workout_plan.iter().enumerate() {
            if day.exercises.len() != expected_exercises {
                return Err(GenerationError::contract(format!(
                    "day {} has {} exercises, expected {expected_exercises}",
                    index + 1,
                    day.exercises.len()
                )));
            }
            if let Some(exercise) = day
                .exercises
                .iter()
                .find(|exercise| exercise.name.trim().is_empty() || exercise.sets == 0)
            {
                return Err(GenerationError::contract(format!(
                    "day {} has an incomplete exercise {:?}",
                    index + 1,
                    exercise.name
                )));
            }
        }

        if self
            .diet_plan
            .meals()
            .iter()
            .any(|meal| meal.name.trim().is_empty())
        {
            return Err(GenerationError::contract("diet plan has an unnamed meal"));
        }

        let expected_tips = richness.tip_count();
        if self.tips.len() != expected_tips {
            return Err(GenerationError::contract(format!(
                "expected {expected_tips} tips, found {}",
                self.tips.len()
            )));
        }

        if self.motivation.trim().is_empty() {
            return Err(GenerationError::contract("motivation is empty"));
        }

        Ok(())
    }
}

/// Motivation quotes shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MotivationQuoteSet {
    /// Non-empty list of quotes
    pub quotes: Vec<String>,
}
