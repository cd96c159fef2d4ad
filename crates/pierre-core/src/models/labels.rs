// ABOUTME: Lenient serde helpers for generator-produced labels and counts
// ABOUTME: Accepts strings or numbers and normalizes them into owned strings or u32 counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRepr {
    Text(String),
    Number(Number),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CountRepr {
    Integer(u64),
    Text(String),
}

/// Deserialize a free-form label that the generator may emit as a number
pub(crate) fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LabelRepr::deserialize(deserializer)? {
        LabelRepr::Text(text) => text,
        LabelRepr::Number(number) => number.to_string(),
    })
}

/// Like [`label`], but a missing or `null` value stays `None`
pub(crate) fn optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<LabelRepr>::deserialize(deserializer)?.map(|repr| match repr {
            LabelRepr::Text(text) => text,
            LabelRepr::Number(number) => number.to_string(),
        }),
    )
}

/// Deserialize a positive count that the generator may emit as a numeric string
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match CountRepr::deserialize(deserializer)? {
        CountRepr::Integer(value) => value,
        CountRepr::Text(text) => text
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("expected a count, found {text:?}")))?,
    };
    u32::try_from(value).map_err(|_| D::Error::custom(format!("count {value} is out of range")))
}

/// Leading number of a label such as `"1,950 cal"`, ignoring thousands separators
pub(crate) fn leading_number(label: &str) -> Option<u32> {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
