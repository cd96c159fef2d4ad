// ABOUTME: Core types and constants for the Pierre plan generator
// ABOUTME: Foundation crate with error handling, profile and plan models, and contract constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for Pierre plan
//! generation. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `GenerationError`
//! - **constants**: Plan contract sizes, timeouts and service names
//! - **models**: User profile, fitness plan and motivation quote types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `FitnessPlan`, `MotivationQuoteSet`)
pub mod models;
