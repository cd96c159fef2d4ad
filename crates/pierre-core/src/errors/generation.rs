// ABOUTME: Error taxonomy for the text generation pipeline (gateway, repair, validation)
// ABOUTME: Every variant is recoverable by deterministic fallback synthesis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;
use thiserror::Error;

/// Failure of one generation attempt
///
/// None of these are surfaced to end users by the orchestrator; they select
/// the fallback path and are logged for operators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Network failure or non-success status from the text generator
    #[error("text generator unavailable: {reason}")]
    GatewayUnavailable {
        /// What went wrong
        reason: String,
    },

    /// The call did not complete within its bound and was cancelled
    #[error("text generator timed out after {}s", timeout.as_secs())]
    GatewayTimeout {
        /// The bound that expired
        timeout: Duration,
    },

    /// Repaired text still failed to parse or had the wrong top-level shape
    #[error("could not parse generator response: {reason}")]
    Parse {
        /// Parser or shape-validation message
        reason: String,
    },

    /// Parsed plan object did not satisfy the plan contract
    #[error("generated plan violates contract: {reason}")]
    ContractViolation {
        /// First violated rule
        reason: String,
    },
}

impl GenerationError {
    /// Create a gateway unavailable error
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::GatewayUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a parse error
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create a contract violation error
    #[must_use]
    pub fn contract(reason: impl Into<String>) -> Self {
        Self::ContractViolation {
            reason: reason.into(),
        }
    }

    /// Short stable label used in logs and response headers
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::GatewayUnavailable { .. } => "gateway_unavailable",
            Self::GatewayTimeout { .. } => "gateway_timeout",
            Self::Parse { .. } => "parse_error",
            Self::ContractViolation { .. } => "contract_violation",
        }
    }
}
