// ABOUTME: Recovers JSON payloads from noisy, prose-wrapped or slightly malformed generator output
// ABOUTME: Runs a fixed sequence of total text passes followed by one strict parse and a shape check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Repair
//!
//! Generators wrap JSON in prose, markdown fences, trailing commas and
//! JavaScript-style quoting. Repair is an ordered list of passes over the
//! text; every pass is total and later passes assume the earlier ones ran:
//!
//! 1. trim surrounding whitespace
//! 2. keep the greedy span from the first opening to the last closing bracket
//! 3. strip code-fence markers
//! 4. drop trailing commas before `]` or `}`
//! 5. (object shape only) double-quote bare and single-quoted keys and
//!    single-quoted values
//! 6. turn raw newline, tab and carriage-return characters into spaces
//!
//! The result is parsed once with `serde_json` and its top-level shape is
//! checked. Repair either fully succeeds or fails with
//! [`GenerationError::Parse`]; no partial value is ever returned.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::errors::GenerationError;

/// Longest excerpt of the repaired text carried in parse errors
const ERROR_EXCERPT_CHARS: usize = 80;

/// Markdown code fences, with or without a language tag
static CODE_FENCE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\n?```[A-Za-z0-9_+\-]*\n?").ok());

/// A double-quoted string, or a comma followed only by whitespace and a closer
static TRAILING_COMMA_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*"|,\s*([\]}])"#).ok());

/// A double-quoted string, a single-quoted string, or a bare key after `{` or `,`
static LOOSE_QUOTING_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#""(?:[^"\\]|\\.)*"|'((?:[^'\\]|\\.)*)'|([{,]\s*)([A-Za-z_$][A-Za-z0-9_$]*)(\s*:)"#,
    )
    .ok()
});

/// Top-level structure the caller expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedShape {
    /// Non-empty array of strings
    Array,
    /// JSON object
    Object,
}

impl ExpectedShape {
    /// Lowercase name used in logs and errors
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    const fn delimiters(self) -> (char, char) {
        match self {
            Self::Array => ('[', ']'),
            Self::Object => ('{', '}'),
        }
    }
}

impl fmt::Display for ExpectedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repair raw generator text and parse it as the expected shape
///
/// # Errors
///
/// Returns [`GenerationError::Parse`] when the repaired text is not valid
/// JSON or its top level does not match `shape`
pub fn repair_and_parse(raw: &str, shape: ExpectedShape) -> Result<Value, GenerationError> {
    let repaired = repair_text(raw, shape);

    let value: Value = serde_json::from_str(&repaired).map_err(|e| {
        GenerationError::parse(format!(
            "repaired {shape} text is not valid JSON ({e}): {}",
            excerpt(&repaired)
        ))
    })?;

    check_shape(&value, shape)?;
    Ok(value)
}

/// Repair and parse an array response into its strings
///
/// # Errors
///
/// Returns [`GenerationError::Parse`] under the same conditions as
/// [`repair_and_parse`] with [`ExpectedShape::Array`]
pub fn repair_string_list(raw: &str) -> Result<Vec<String>, GenerationError> {
    match repair_and_parse(raw, ExpectedShape::Array)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect()),
        other => Err(GenerationError::parse(format!(
            "expected an array, found {}",
            json_kind(&other)
        ))),
    }
}

/// Apply every text pass for `shape` in order, without parsing
#[must_use]
pub fn repair_text(raw: &str, shape: ExpectedShape) -> String {
    let text = raw.trim();
    let text = extract_bracketed_span(text, shape);
    let text = strip_code_fences(text);
    let text = remove_trailing_commas(&text);
    let text = match shape {
        ExpectedShape::Object => normalize_quotes(&text),
        ExpectedShape::Array => text,
    };
    collapse_control_whitespace(&text)
}

/// Keep the span from the first opening to the last closing delimiter
///
/// Text without such a span is returned unchanged.
#[must_use]
pub fn extract_bracketed_span(text: &str, shape: ExpectedShape) -> &str {
    let (open, close) = shape.delimiters();
    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Remove triple-backtick fence markers, including any language tag
#[must_use]
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_PATTERN.as_ref().map_or_else(
        || text.trim().to_owned(),
        |pattern| pattern.replace_all(text, "").trim().to_owned(),
    )
}

/// Drop commas that directly precede a closing bracket or brace
///
/// Commas inside double-quoted strings are left alone.
#[must_use]
pub fn remove_trailing_commas(text: &str) -> String {
    let Some(pattern) = TRAILING_COMMA_PATTERN.as_ref() else {
        return text.to_owned();
    };
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            caps.get(1).map_or_else(
                || caps[0].to_owned(),
                |closer| closer.as_str().to_owned(),
            )
        })
        .into_owned()
}

/// Rewrite JavaScript-style quoting into JSON quoting
///
/// Bare keys become double-quoted and single-quoted strings become
/// double-quoted with inner double quotes escaped. Existing double-quoted
/// strings pass through untouched, so apostrophes inside them survive.
#[must_use]
pub fn normalize_quotes(text: &str) -> String {
    let Some(pattern) = LOOSE_QUOTING_PATTERN.as_ref() else {
        return text.to_owned();
    };
    pattern
        .replace_all(text, |caps: &Captures<'_>| {
            if let Some(single) = caps.get(1) {
                return format!("\"{}\"", requote_single_quoted(single.as_str()));
            }
            if let (Some(prefix), Some(key), Some(colon)) = (caps.get(2), caps.get(3), caps.get(4))
            {
                return format!("{}\"{}\"{}", prefix.as_str(), key.as_str(), colon.as_str());
            }
            caps[0].to_owned()
        })
        .into_owned()
}

/// Replace raw newline, tab and carriage-return characters with spaces
#[must_use]
pub fn collapse_control_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\t' | '\r' => ' ',
            other => other,
        })
        .collect()
}

/// Body of a single-quoted string re-escaped for double quotes
fn requote_single_quoted(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2);
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'\'') => {
                out.push('\'');
                chars.next();
            }
            '\\' => {
                out.push('\\');
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

fn check_shape(value: &Value, shape: ExpectedShape) -> Result<(), GenerationError> {
    match (shape, value) {
        (ExpectedShape::Array, Value::Array(items)) => {
            if items.is_empty() {
                return Err(GenerationError::parse("array is empty"));
            }
            if let Some(position) = items.iter().position(|item| !item.is_string()) {
                return Err(GenerationError::parse(format!(
                    "array element {position} is {}, expected a string",
                    json_kind(&items[position])
                )));
            }
            Ok(())
        }
        (ExpectedShape::Object, Value::Object(_)) => Ok(()),
        (_, other) => Err(GenerationError::parse(format!(
            "expected {shape}, found {}",
            json_kind(other)
        ))),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(ERROR_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
