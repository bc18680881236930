//! Input-string conventions and serde helpers for [`Options`](super::Options).
//!
//! CI runners hand every option over as a string. These helpers give those
//! strings a single interpretation whether they come from flags, environment
//! variables, or the YAML options file.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Default template name.
pub fn default_template() -> String {
    crate::template::DEFAULT_TEMPLATE.to_string()
}

/// Interpret an input string as a boolean.
///
/// `false`, `no`, `0` and the empty string (case-insensitive, trimmed) are
/// false; anything else is true.
pub fn string_to_bool(value: &str) -> bool {
    !is_falsy_input(value)
}

/// Keep `value` unless it is one of the falsy input strings.
pub fn string_or_false(value: &str) -> Option<String> {
    if is_falsy_input(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Split a multi-line input into trimmed, non-empty lines.
pub fn multiline_to_vec(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn is_falsy_input(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "no" | "0" | ""
    )
}

/// Accept a boolean, number, or input string for a boolean option.
///
/// A null (blank) value is false.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(b),
        Value::Number(n) => Ok(string_to_bool(&n.to_string())),
        Value::String(s) => Ok(string_to_bool(&s)),
        other => Err(D::Error::custom(format!(
            "expected a boolean or string, found {}",
            other
        ))),
    }
}

/// Accept a YAML list or a multi-line block string for a pattern option.
///
/// A null (blank) value means no patterns; scalar list items are kept as text.
pub fn deserialize_patterns<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => {
            let mut patterns = Vec::with_capacity(items.len());
            for item in items {
                let Some(text) = scalar_text(&item).map_err(D::Error::custom)? else {
                    continue;
                };
                let text = text.trim();
                if !text.is_empty() {
                    patterns.push(text.to_string());
                }
            }
            Ok(patterns)
        }
        Value::String(text) => Ok(multiline_to_vec(&text)),
        other => Ok(scalar_text(&other)
            .map_err(D::Error::custom)?
            .map(|text| multiline_to_vec(&text))
            .unwrap_or_default()),
    }
}

/// Text of a scalar YAML value; `None` for null, an error for containers.
fn scalar_text(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Bool(_) | Value::Number(_) => Ok(Some(value.to_string())),
        Value::Array(_) | Value::Object(_) => {
            Err(format!("expected a pattern string, found {}", value))
        }
    }
}

/// Accept a string, `false`, or a structured YAML value for the embed
/// override. Structured values are re-encoded as JSON text.
pub fn deserialize_embed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) => string_or_false(&s),
        Some(other) => Some(other.to_string()),
    })
}
