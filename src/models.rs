// ABOUTME: Data models re-exported from pierre-core
// ABOUTME: UserProfile, FitnessPlan, MotivationQuoteSet and their building blocks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::models::*;
