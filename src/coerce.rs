//! Lenient coercion of API values: ids shared by form population, payload
//! building and the service model, plus null-tolerant text fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a raw JSON value into an entity id.
///
/// Integral numbers and numeric strings (surrounding whitespace allowed)
/// coerce; `null`, empty or blank strings, booleans, containers,
/// non-numeric text and non-integral numbers yield `None`.
pub fn coerce_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => coerce_id_str(s),
        _ => None,
    }
}

/// Coerce form text (e.g. a `<select>` value) into an entity id.
pub fn coerce_id_str(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().and_then(integral))
}

fn integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64 {
        Some(n as i64)
    } else {
        None
    }
}

/// Serde adapter: accepts a number, numeric string, empty string, null or
/// a missing key for an optional id.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(coerce_id))
}

/// Serde adapter for text fields: `null` reads as an empty string.
pub fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
