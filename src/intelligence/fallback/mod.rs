// ABOUTME: Rule-based synthesis of complete plans and quote sets from static content tables
// ABOUTME: Selection is driven by the profile and an injected random source so output is reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fallback Synthesis
//!
//! Used whenever the generator fails or its output cannot be repaired.
//! Synthesis never fails and always satisfies the plan size contract.
//!
//! Randomness comes from the `Rng` the synthesizer owns. Production code
//! seeds a fresh [`ChaCha8Rng`] per call; tests and operators pin a seed to
//! get identical output for identical input.

mod content;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use content::{
    level_labels, DietTemplate, ExerciseTemplate, DAY_FOCUSES, GOAL_PLACEHOLDER, GYM_EXERCISES,
    HOME_EXERCISES, MOTIVATION_TEMPLATES, NAME_PLACEHOLDER, NON_VEGETARIAN_DIET,
    OUTDOOR_EXERCISES, QUOTE_SETS, SLEEP_PLACEHOLDER, TIP_TEMPLATES, VEGAN_DIET,
    VEGETARIAN_DIET,
};

use crate::models::{
    DietaryPreference, FitnessPlan, MotivationQuoteSet, PlanRichness, UserProfile, WorkoutDay,
    WorkoutLocation,
};

/// The three diet tables available to fallback plans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DietTable {
    /// Dairy-inclusive vegetarian day
    Vegetarian,
    /// Meat and fish day, also served for keto
    NonVegetarian,
    /// Plant-only day
    Vegan,
}

impl DietTable {
    /// Table name used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::NonVegetarian => "non-vegetarian",
            Self::Vegan => "vegan",
        }
    }

    const fn template(self) -> DietTemplate {
        match self {
            Self::Vegetarian => VEGETARIAN_DIET,
            Self::NonVegetarian => NON_VEGETARIAN_DIET,
            Self::Vegan => VEGAN_DIET,
        }
    }
}

/// Diet table served for a preference
///
/// There is no dedicated keto table; keto shares the non-vegetarian day.
#[must_use]
pub const fn diet_table_for(preference: DietaryPreference) -> DietTable {
    match preference {
        DietaryPreference::Veg => DietTable::Vegetarian,
        DietaryPreference::Vegan => DietTable::Vegan,
        DietaryPreference::NonVeg | DietaryPreference::Keto => DietTable::NonVegetarian,
    }
}

const fn exercises_for(location: WorkoutLocation) -> &'static [ExerciseTemplate] {
    match location {
        WorkoutLocation::Home => &HOME_EXERCISES,
        WorkoutLocation::Gym => &GYM_EXERCISES,
        WorkoutLocation::Outdoor => &OUTDOOR_EXERCISES,
    }
}

/// Substitute profile values into a tip or motivation template
///
/// The name goes in last so a name that looks like a placeholder is kept verbatim.
fn fill_template(template: &str, name: &str, goal: &str, sleep: &str) -> String {
    template
        .replace(SLEEP_PLACEHOLDER, sleep)
        .replace(GOAL_PLACEHOLDER, goal)
        .replace(NAME_PLACEHOLDER, name)
}

/// Builds plans and quote sets without calling the generator
#[derive(Debug, Clone)]
pub struct FallbackSynthesizer<R: Rng> {
    rng: R,
}

impl FallbackSynthesizer<ChaCha8Rng> {
    /// Synthesizer with a fixed seed; identical inputs give identical output
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Synthesizer seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> FallbackSynthesizer<R> {
    /// Wrap a random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a complete plan for `profile`
    ///
    /// Each day gets an independent shuffle of the location's exercise
    /// table cut to the richness size, so the same exercise may appear on
    /// several days.
    pub fn synthesize_plan(&mut self, profile: &UserProfile, richness: PlanRichness) -> FitnessPlan {
        let table = exercises_for(profile.workout_location);
        let per_day = richness.exercises_per_day().min(table.len());
        let (duration, calories_burned) = level_labels(profile.fitness_level);

        let workout_plan = DAY_FOCUSES
            .iter()
            .enumerate()
            .map(|(index, focus)| {
                let mut shuffled = table.to_vec();
                shuffled.shuffle(&mut self.rng);
                WorkoutDay {
                    day: format!("Day {}", index + 1),
                    focus: (*focus).to_owned(),
                    exercises: shuffled
                        .into_iter()
                        .take(per_day)
                        .map(ExerciseTemplate::to_exercise)
                        .collect(),
                    duration: duration.to_owned(),
                    calories_burned: calories_burned.to_owned(),
                }
            })
            .collect();

        let goal = profile.fitness_goal.display_name();
        let sleep = profile.sleep_hours_or_default().to_string();
        let tips = TIP_TEMPLATES
            .iter()
            .take(richness.tip_count())
            .map(|template| {
                fill_template(template, &profile.name, &goal, &sleep)
            })
            .collect();

        let motivation = fill_template(
            MOTIVATION_TEMPLATES
                .choose(&mut self.rng)
                .unwrap_or(&MOTIVATION_TEMPLATES[0]),
            &profile.name,
            &goal,
            &sleep,
        );

        FitnessPlan {
            workout_plan,
            diet_plan: diet_table_for(profile.dietary_preference)
                .template()
                .to_diet_day(),
            tips,
            motivation,
        }
    }

    /// Pick one of the fixed quote sets
    pub fn synthesize_quotes(&mut self) -> MotivationQuoteSet {
        let set = QUOTE_SETS.choose(&mut self.rng).unwrap_or(&QUOTE_SETS[0]);
        MotivationQuoteSet {
            quotes: set.iter().map(|quote| (*quote).to_owned()).collect(),
        }
    }
}
