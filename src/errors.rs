// ABOUTME: Unified error handling re-exported from pierre-core
// ABOUTME: Keeps `crate::errors` paths stable for routes, services and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::errors::*;
