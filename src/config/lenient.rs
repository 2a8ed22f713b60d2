//! Lenient field deserializers.
//!
//! Every nested level of a config document is optional. A level holding the
//! wrong JSON type resolves to "absent" at that level instead of failing the
//! whole document. Descriptive strings only count when they are non-empty.
//! Engine names follow JSON truthiness: `null`, `false`, `0` and `""` are
//! absent, and any other value is a candidate name.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// `true` unless the value is literally `false`.
pub(crate) fn enabled_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(!matches!(value, Value::Bool(false)))
}

/// A non-empty string, or `None` for anything else.
pub(crate) fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(into_non_empty_string(value))
}

/// A nested record, or its default when the value has the wrong shape.
pub(crate) fn record_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A nested record that is only present when the value is a JSON object.
pub(crate) fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
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

/// A map of records. Every key of an object is kept; values with the wrong
/// shape become empty records.
pub(crate) fn record_map<'de, D, T>(deserializer: D) -> Result<BTreeMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .map(|(key, value)| (key, serde_json::from_value(value).unwrap_or_default()))
        .collect())
}

/// An engine name, or `None` when the value is falsy.
pub(crate) fn engine_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(into_engine_name(value))
}

/// A map of engine names. Entries with a falsy value are dropped.
pub(crate) fn engine_name_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(entries) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| into_engine_name(value).map(|name| (key, name)))
        .collect())
}

fn into_non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

// A non-string candidate keeps its JSON text so validation can reject it by name.
fn into_engine_name(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => (!s.is_empty()).then_some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
