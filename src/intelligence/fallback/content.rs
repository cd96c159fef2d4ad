// ABOUTME: Read-only content tables for rule-based plans and quotes
// ABOUTME: Exercise lists per location, diet days per preference, tip and motivation templates, quote sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{DietDay, Exercise, FitnessLevel, Meal};

/// Placeholder replaced by the profile name
pub const NAME_PLACEHOLDER: &str = "{name}";
/// Placeholder replaced by the goal with hyphens turned into spaces
pub const GOAL_PLACEHOLDER: &str = "{goal}";
/// Placeholder replaced by reported sleep hours
pub const SLEEP_PLACEHOLDER: &str = "{sleep}";

/// Static exercise entry
#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplate {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub rest_time: &'static str,
    pub notes: &'static str,
}

impl ExerciseTemplate {
    pub fn to_exercise(self) -> Exercise {
        Exercise {
            name: self.name.to_owned(),
            sets: self.sets,
            reps: self.reps.to_owned(),
            rest_time: self.rest_time.to_owned(),
            notes: Some(self.notes.to_owned()),
        }
    }
}

const fn exercise(
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest_time: &'static str,
    notes: &'static str,
) -> ExerciseTemplate {
    ExerciseTemplate {
        name,
        sets,
        reps,
        rest_time,
        notes,
    }
}

pub const HOME_EXERCISES: [ExerciseTemplate; 8] = [
    exercise("Push-ups", 3, "15", "45s", "Keep core tight"),
    exercise("Squats", 4, "20", "60s", "Go deep"),
    exercise("Lunges", 3, "12 each leg", "45s", "Keep balance"),
    exercise("Plank", 3, "45 seconds", "30s", "Engage abs"),
    exercise("Burpees", 3, "10", "60s", "Full range motion"),
    exercise("Mountain Climbers", 3, "20", "45s", "Fast pace"),
    exercise("Jumping Jacks", 3, "30", "30s", "Warm up"),
    exercise("Tricep Dips", 3, "12", "45s", "Use chair"),
];

pub const GYM_EXERCISES: [ExerciseTemplate; 8] = [
    exercise("Bench Press", 4, "10", "90s", "Control the weight"),
    exercise("Deadlifts", 4, "8", "120s", "Keep back straight"),
    exercise("Lat Pulldown", 3, "12", "60s", "Squeeze at bottom"),
    exercise("Leg Press", 4, "12", "90s", "Full range"),
    exercise("Shoulder Press", 3, "10", "60s", "Don't lock elbows"),
    exercise("Cable Rows", 3, "12", "60s", "Pull to chest"),
    exercise("Leg Curls", 3, "12", "45s", "Control movement"),
    exercise("Bicep Curls", 3, "12", "45s", "No swinging"),
];

pub const OUTDOOR_EXERCISES: [ExerciseTemplate; 8] = [
    exercise("Running", 1, "20 minutes", "0s", "Steady pace"),
    exercise("Sprint Intervals", 6, "30 seconds", "60s", "Maximum effort"),
    exercise("Park Bench Push-ups", 3, "15", "45s", "Incline variation"),
    exercise("Step-ups", 3, "12 each", "45s", "Use bench"),
    exercise("Walking Lunges", 3, "20 steps", "60s", "Long strides"),
    exercise("Pull-ups (bar)", 3, "8", "60s", "Full extension"),
    exercise("Box Jumps", 3, "10", "60s", "Land soft"),
    exercise("Bear Crawls", 3, "30 feet", "45s", "Stay low"),
];

/// Focus label for each of the seven days, in order
pub const DAY_FOCUSES: [&str; 7] = [
    "Chest & Triceps",
    "Back & Biceps",
    "Legs & Glutes",
    "Shoulders & Core",
    "Full Body HIIT",
    "Lower Body Focus",
    "Active Recovery",
];

/// Duration and calories labels, identical for every day
pub const fn level_labels(level: FitnessLevel) -> (&'static str, &'static str) {
    match level {
        FitnessLevel::Beginner => ("30 min", "250 cal"),
        FitnessLevel::Intermediate => ("45 min", "350 cal"),
        FitnessLevel::Advanced => ("60 min", "450 cal"),
    }
}

/// Static meal entry
#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub calories: &'static str,
    pub protein: &'static str,
    pub carbs: &'static str,
    pub fats: &'static str,
}

impl MealTemplate {
    fn to_meal(self) -> Meal {
        Meal {
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            calories: self.calories.to_owned(),
            protein: self.protein.to_owned(),
            carbs: self.carbs.to_owned(),
            fats: self.fats.to_owned(),
        }
    }
}

const fn meal(
    name: &'static str,
    description: &'static str,
    calories: &'static str,
    protein: &'static str,
    carbs: &'static str,
    fats: &'static str,
) -> MealTemplate {
    MealTemplate {
        name,
        description,
        calories,
        protein,
        carbs,
        fats,
    }
}

/// Static full day of meals
#[derive(Debug, Clone, Copy)]
pub struct DietTemplate {
    pub breakfast: MealTemplate,
    pub mid_morning_snack: MealTemplate,
    pub lunch: MealTemplate,
    pub evening_snack: MealTemplate,
    pub dinner: MealTemplate,
    pub total_calories: &'static str,
}

impl DietTemplate {
    pub fn to_diet_day(self) -> DietDay {
        DietDay {
            breakfast: self.breakfast.to_meal(),
            mid_morning_snack: self.mid_morning_snack.to_meal(),
            lunch: self.lunch.to_meal(),
            evening_snack: self.evening_snack.to_meal(),
            dinner: self.dinner.to_meal(),
            total_calories: self.total_calories.to_owned(),
        }
    }
}

pub const VEGETARIAN_DIET: DietTemplate = DietTemplate {
    breakfast: meal(
        "Oatmeal with Fruits",
        "Whole grain oats with berries, banana and honey",
        "380 cal",
        "12g",
        "65g",
        "8g",
    ),
    mid_morning_snack: meal(
        "Greek Yogurt Parfait",
        "High protein yogurt with granola and nuts",
        "220 cal",
        "18g",
        "25g",
        "8g",
    ),
    lunch: meal(
        "Quinoa Buddha Bowl",
        "Quinoa with roasted vegetables, chickpeas and tahini",
        "520 cal",
        "22g",
        "68g",
        "18g",
    ),
    evening_snack: meal(
        "Protein Smoothie",
        "Plant protein with almond milk and banana",
        "280 cal",
        "25g",
        "35g",
        "6g",
    ),
    dinner: meal(
        "Paneer Tikka with Roti",
        "Grilled cottage cheese with whole wheat bread",
        "550 cal",
        "28g",
        "52g",
        "24g",
    ),
    total_calories: "1950 cal",
};

pub const NON_VEGETARIAN_DIET: DietTemplate = DietTemplate {
    breakfast: meal(
        "Egg White Omelette",
        "6 egg whites with spinach and mushrooms",
        "320 cal",
        "36g",
        "8g",
        "12g",
    ),
    mid_morning_snack: meal(
        "Chicken Breast Strips",
        "Grilled chicken with hummus",
        "250 cal",
        "32g",
        "12g",
        "8g",
    ),
    lunch: meal(
        "Grilled Salmon Salad",
        "Fresh greens with salmon and olive oil dressing",
        "480 cal",
        "42g",
        "18g",
        "26g",
    ),
    evening_snack: meal(
        "Whey Protein Shake",
        "Whey protein with banana and peanut butter",
        "320 cal",
        "35g",
        "28g",
        "10g",
    ),
    dinner: meal(
        "Chicken Tikka with Rice",
        "Lean grilled chicken with brown rice",
        "580 cal",
        "45g",
        "55g",
        "18g",
    ),
    total_calories: "1950 cal",
};

pub const VEGAN_DIET: DietTemplate = DietTemplate {
    breakfast: meal(
        "Tofu Scramble",
        "Spiced tofu with vegetables and avocado toast",
        "420 cal",
        "22g",
        "38g",
        "22g",
    ),
    mid_morning_snack: meal(
        "Trail Mix",
        "Mixed nuts, seeds and dried fruits",
        "280 cal",
        "8g",
        "28g",
        "18g",
    ),
    lunch: meal(
        "Lentil Curry Bowl",
        "Red lentils with brown rice and vegetables",
        "520 cal",
        "24g",
        "78g",
        "12g",
    ),
    evening_snack: meal(
        "Pea Protein Shake",
        "Plant protein with oat milk and berries",
        "260 cal",
        "28g",
        "22g",
        "6g",
    ),
    dinner: meal(
        "Chickpea Stir Fry",
        "Spiced chickpeas with quinoa and greens",
        "480 cal",
        "22g",
        "62g",
        "16g",
    ),
    total_calories: "1960 cal",
};

/// Tip templates; the first five are used unless the plan is rich
pub const TIP_TEMPLATES: [&str; 8] = [
    "Drink at least 3-4 liters of water daily, {name}!",
    "Get {sleep}-8 hours of quality sleep every night",
    "Consistency beats intensity - show up every day",
    "Focus on progressive overload for {goal}",
    "Track your meals and workouts in a journal",
    "Rest days are growth days - don't skip them",
    "Warm up for 5-10 minutes before every workout",
    "Cool down and stretch after each session",
];

pub const MOTIVATION_TEMPLATES: [&str; 5] = [
    "{name}, you are stronger than you think. Every rep, every set, every meal is building the best version of yourself. Keep pushing!",
    "The only bad workout is the one that didn't happen. {name}, you've got this - your {goal} goal is within reach!",
    "{name}, remember why you started. That vision of yourself is waiting. One day at a time, one workout at a time!",
    "Champions are made when no one is watching. {name}, put in the work today and watch the magic unfold!",
    "Your body can do it, {name}. It's your mind you need to convince. Stay focused on your {goal} journey!",
];

pub const QUOTE_SETS: [[&str; 3]; 4] = [
    [
        "Your body can stand almost anything. It's your mind that you have to convince.",
        "The only bad workout is the one that didn't happen.",
        "Success isn't always about greatness. It's about consistency.",
    ],
    [
        "Sweat is just fat crying. Make it weep today!",
        "The pain you feel today will be the strength you feel tomorrow.",
        "Don't stop when you're tired. Stop when you're done.",
    ],
    [
        "Fitness is not about being better than someone else. It's about being better than you used to be.",
        "Your health is an investment, not an expense.",
        "The body achieves what the mind believes.",
    ],
    [
        "Wake up with determination. Go to bed with satisfaction.",
        "A one-hour workout is 4% of your day. No excuses.",
        "Champions train, losers complain.",
    ],
];
