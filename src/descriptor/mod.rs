// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Relaxed descriptor parsing.
//!
//! ```text
//! raw text
//!    |
//!    v
//! strip_comments   "..." / '...' kept verbatim
//!                  # and // to end of line, /* ... */ removed
//!    |
//!    v
//! json5::from_str  unquoted keys, trailing commas, single quotes
//!    |
//!    v
//! Map<String, Value>  (top level must be an object)
//! ```
//!
//! Helpers below read loosely typed values out of the resulting map. They
//! never fail: a missing or unusable value is simply `None`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::{Map, Value};

use crate::error::ParseError;

/// A parsed descriptor object.
pub type Descriptor = Map<String, Value>;

/// Quoted strings (group 1), or a comment: `#` or `//` to the end of the
/// line, or a `/* ... */` block.
static COMMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)("(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*')|#[^\r\n]*|//[^\r\n]*|/\*.*?\*/"#,
    )
    .expect("comment pattern is a valid regex")
});

/// Remove `#`, `//` and `/* */` comments that are not inside a quoted string.
///
/// The whole text is scanned once so that a `#` inside a string value
/// (e.g. `"name": "Mod #2"`) survives. Line breaks outside block comments
/// are kept.
#[must_use]
pub fn strip_comments(raw: &str) -> Cow<'_, str> {
    COMMENT_PATTERN.replace_all(raw, |caps: &Captures<'_>| {
        caps.get(1).map_or_else(String::new, |m| m.as_str().to_string())
    })
}

/// Parse a relaxed, comment-bearing descriptor into a JSON object.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text left after comment stripping is not
/// relaxed JSON or its top-level value is not an object.
pub fn parse(raw: &str) -> Result<Descriptor, ParseError> {
    let stripped = strip_comments(raw);
    let value: Value =
        json5::from_str(&stripped).map_err(|e| ParseError::new(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(ParseError::new(format!(
            "expected an object at top level, found {}",
            value_kind(&other)
        ))),
    }
}

/// Render a scalar as text: strings are trimmed, numbers use their JSON form.
///
/// Returns `None` for null, booleans, arrays, and objects.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Look up `key` and return it only if it is a string (trimmed).
#[must_use]
pub fn string_field(descriptor: &Descriptor, key: &str) -> Option<String> {
    descriptor
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
}

/// Look up `key` and render it as text if it is a string or a number.
#[must_use]
pub fn scalar_field(descriptor: &Descriptor, key: &str) -> Option<String> {
    descriptor.get(key).and_then(scalar_text)
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
