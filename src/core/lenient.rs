//! Lenient field decoders for assessment records.
//!
//! Records arrive from an external assessment step and are not trusted.
//! Each decoder reads the raw JSON value and maps anything of the wrong
//! shape to "absent" (or empty), so a single bad field never rejects a
//! whole record and never turns into a zero that would drag averages down.
//!
//! Use with `#[serde(default, deserialize_with = "...")]`: `default` covers
//! the missing-field case, the decoder covers the present-but-malformed one.

use super::score::Score;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Finite JSON number, otherwise `None`.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value))
}

/// Finite JSON number rounded and clamped into a [`Score`].
pub fn score<'de, D>(deserializer: D) -> Result<Option<Score>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value).and_then(Score::from_finite))
}

/// Non-negative whole count such as an iteration number.
pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(finite_number(&value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round().min(f64::from(u32::MAX)) as u32))
}

/// Boolean flag, `false` unless literally `true`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

/// Text field; numbers are rendered, anything else is absent.
pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Array of records; non-arrays decode as empty, bad elements are dropped.
pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        if !value.is_null() {
            tracing::trace!("expected an array, treating {} as empty", kind(&value));
        }
        return Ok(Vec::new());
    };

    Ok(entries(items))
}

/// Decode each element, dropping the ones that do not fit `T`.
pub fn entries<T: DeserializeOwned>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::trace!(index, error = %e, "dropping malformed entry");
                None
            }
        })
        .collect()
}

/// Name-to-number map keeping only finite numeric values.
pub fn number_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Object(entries) = value else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(name, raw)| match finite_number(&raw) {
            Some(n) => Some((name, n)),
            None => {
                tracing::trace!(category = %name, "excluding non-numeric category score");
                None
            }
        })
        .collect())
}

/// Nested object; `null` or a malformed object decodes as `None`.
pub fn record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
