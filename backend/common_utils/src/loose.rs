//! Deserializers for the shop's loosely typed arrays.
//!
//! Basket and customer data arrive as untyped maps where flags may be `true`,
//! `1`, `"1"` or `"0"` and identifiers may be numbers or strings. These helpers
//! normalise such values with PHP truthiness rules at the boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// PHP truthiness: `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]` and `{}` are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !(text.is_empty() || text == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer).map(|value| value.as_ref().is_some_and(is_truthy))
}

/// Strings and numbers become strings; `null` and empty strings become `None`.
pub fn optional_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(true)) => Some("1".to_string()),
        _ => None,
    })
}

/// Integers, integral floats and numeric strings become `i64`; anything else is `None`.
pub fn integer_from_any(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|n| n.fract() == 0.0).map(truncate)),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn u32_from_any<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integer_from_any(&value)
        .and_then(|number| u32::try_from(number).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("expected a quantity, found {value}")))
}

#[allow(clippy::as_conversions)]
fn truncate(value: f64) -> i64 {
    value as i64
}
