// ABOUTME: Application constants re-exported from pierre-core
// ABOUTME: Plan contract sizes, endpoints, ports and generation timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_core::constants::*;
