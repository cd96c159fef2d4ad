// ABOUTME: Plan request envelope accepted by the HTTP API and the operator CLI
// ABOUTME: Accepts a wrapped or bare profile and maps decoding failures to client errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde_json::Value;

use super::{PlanRichness, UserProfile};
use crate::errors::{AppError, AppResult};

const PROFILE_KEY: &str = "profile";
const REGENERATE_KEY: &str = "isRegenerate";

/// A decoded and validated plan request
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Profile driving the plan
    pub profile: UserProfile,
    /// Whether the user asked for a regenerated, richer plan
    pub is_regenerate: bool,
}

impl PlanRequest {
    /// Decode a request body
    ///
    /// The body is either `{ "profile": {...}, "isRegenerate": bool }` or the
    /// profile object itself. A missing or `null` `isRegenerate` means
    /// `false`; `"true"`, `"false"`, `1` and `0` are accepted as well.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the body is not a JSON object and
    /// `InvalidInput` when `isRegenerate` is not a recognised flag or the
    /// profile is missing fields or breaks a value rule
    pub fn from_json_bytes(body: &[u8]) -> AppResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            AppError::invalid_format(format!("request body is not valid JSON: {e}")).with_source(e)
        })?;
        Self::from_value(value)
    }

    /// Decode an already-parsed request body
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_json_bytes`]
    pub fn from_value(mut value: Value) -> AppResult<Self> {
        let Some(body) = value.as_object_mut() else {
            return Err(AppError::invalid_format("request body must be a JSON object"));
        };

        let is_regenerate = regenerate_flag(body.get(REGENERATE_KEY))?;

        let profile_value = match body.remove(PROFILE_KEY) {
            Some(profile @ Value::Object(_)) => profile,
            Some(Value::Null) | None => {
                body.remove(REGENERATE_KEY);
                value
            }
            Some(_) => {
                return Err(AppError::invalid_format("profile must be a JSON object"));
            }
        };

        let profile: UserProfile = serde_json::from_value(profile_value).map_err(|e| {
            AppError::invalid_input(format!("invalid profile: {e}")).with_source(e)
        })?;
        profile.validate()?;

        Ok(Self {
            profile,
            is_regenerate,
        })
    }

    /// Richness implied by the regenerate flag
    #[must_use]
    pub const fn richness(&self) -> PlanRichness {
        PlanRichness::from_regenerate(self.is_regenerate)
    }
}

fn regenerate_flag(value: Option<&Value>) -> AppResult<bool> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(Value::Number(number)) if number.as_u64() == Some(0) => Ok(false),
        Some(Value::Number(number)) if number.as_u64() == Some(1) => Ok(true),
        Some(Value::String(text)) if text.trim().eq_ignore_ascii_case("true") => Ok(true),
        Some(Value::String(text)) if text.trim().eq_ignore_ascii_case("false") => Ok(false),
        Some(other) => Err(AppError::invalid_input(format!(
            "{REGENERATE_KEY} must be a boolean, got {other}"
        ))),
    }
}
