// ABOUTME: Criterion benchmarks for generator response repair and fallback synthesis
// ABOUTME: Measures the text passes, full plan validation and rule-based plan building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the generation post-processing pipeline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pierre_planner::intelligence::{
    parse_plan, repair_and_parse, ExpectedShape, FallbackSynthesizer,
};
use pierre_planner::models::{
    DietaryPreference, FitnessGoal, FitnessLevel, Gender, PlanRichness, UserProfile,
    WorkoutLocation,
};

fn bench_profile() -> UserProfile {
    UserProfile {
        name: "Bench".to_owned(),
        age: 34,
        gender: Gender::Male,
        height: 180.0,
        weight: 82.0,
        fitness_goal: FitnessGoal::MuscleGain,
        fitness_level: FitnessLevel::Intermediate,
        workout_location: WorkoutLocation::Gym,
        dietary_preference: DietaryPreference::NonVeg,
        medical_history: None,
        stress_level: None,
        sleep_hours: Some(7.5),
    }
}

/// Plan JSON wrapped the way chatty generators return it
fn noisy_plan(richness: PlanRichness) -> String {
    let plan = FallbackSynthesizer::from_seed(7).synthesize_plan(&bench_profile(), richness);
    let json = serde_json::to_string_pretty(&plan).unwrap();
    let with_trailing_commas = json.replace("\n  ]", ",\n  ]");
    format!("Here is your plan:\n```json\n{with_trailing_commas}\n```\nStay strong!")
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair");

    let quotes = "Sure!\n```json\n[\"Lift.\", \"Rest.\", \"Repeat.\",]\n```";
    group.throughput(Throughput::Bytes(quotes.len() as u64));
    group.bench_function("quote_array", |b| {
        b.iter(|| repair_and_parse(black_box(quotes), ExpectedShape::Array));
    });

    let plan = noisy_plan(PlanRichness::High);
    group.throughput(Throughput::Bytes(plan.len() as u64));
    group.bench_function("rich_plan_object", |b| {
        b.iter(|| repair_and_parse(black_box(&plan), ExpectedShape::Object));
    });

    group.finish();
}

fn bench_parse_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_plan");

    for (label, richness) in [
        ("standard", PlanRichness::Standard),
        ("high", PlanRichness::High),
    ] {
        let plan = noisy_plan(richness);
        group.throughput(Throughput::Bytes(plan.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| parse_plan(black_box(&plan), richness));
        });
    }

    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    let profile = bench_profile();
    let mut synthesizer = FallbackSynthesizer::from_seed(99);

    c.bench_function("fallback_plan_high", |b| {
        b.iter(|| synthesizer.synthesize_plan(black_box(&profile), PlanRichness::High));
    });
}

criterion_group!(benches, bench_repair, bench_parse_plan, bench_fallback);
criterion_main!(benches);
