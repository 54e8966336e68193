//! Tolerant field deserializers for backend payloads.
//!
//! The Java backend serializes boxed numbers, so any numeric or collection
//! field may come back as `null`. These helpers map `null` to the field's
//! empty value while still rejecting values of the wrong type.
//!
//! Combine with `#[serde(default)]` so that a missing field behaves like `null`:
//!
//! ```rust
//! #[derive(serde::Deserialize)]
//! struct Row {
//!     #[serde(default, deserialize_with = "contracts::shared::lenient::number_or_zero")]
//!     total: f64,
//! }
//! ```

use serde::{Deserialize, Deserializer};

/// `null` -> `0.0`, any JSON number -> `f64`
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// `null` -> `""`
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` -> empty vec, and `null` elements are dropped
pub fn seq_skip_nulls<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().flatten().collect())
}

/// Accepts anything; keeps the value only when it is a finite number.
pub fn finite_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64().filter(|n| n.is_finite()))
}
