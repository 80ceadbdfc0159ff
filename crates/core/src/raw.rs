// SPDX-License-Identifier: MIT

//!
//! Raw cell values and the columnar store the host hands over
//!

use crate::ColumnKey;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single raw cell value, exactly as received from the host
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(from = "serde_json::Value")]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),

    /// A native date-time (never produced by JSON, only by Rust callers)
    DateTime(NaiveDateTime),
}

impl RawValue {
    /// Whether the value is `null`
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Whether the host would consider the value "empty": `null`, `false`,
    /// `0`, `NaN`, or the empty string
    pub fn is_falsy(&self) -> bool {
        match self {
            RawValue::Null => true,
            RawValue::Bool(value) => !value,
            RawValue::Number(value) => *value == 0.0 || value.is_nan(),
            RawValue::Text(value) => value.is_empty(),
            RawValue::DateTime(_) => false,
        }
    }

    /// `Some(self)` unless the value is falsy
    pub fn truthy(&self) -> Option<&RawValue> {
        (!self.is_falsy()).then_some(self)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(value) => RawValue::Bool(value),
            Value::Number(number) => number
                .as_f64()
                .map(RawValue::Number)
                .unwrap_or(RawValue::Null),
            Value::String(value) => RawValue::Text(value),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(value: NaiveDateTime) -> Self {
        RawValue::DateTime(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Null)
    }
}

/// Stringifies the way the host displays values: integral numbers have no
/// fractional part and date-times are ISO-8601
impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(value) => write!(f, "{value}"),
            RawValue::Number(value) => fmt_number(*value, f),
            RawValue::Text(value) => write!(f, "{value}"),
            RawValue::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

fn fmt_number(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        write!(f, "NaN")
    } else if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        write!(f, "{sign}Infinity")
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        write!(f, "{value:.0}")
    } else {
        write!(f, "{value}")
    }
}

/// Mapping from column key to the column's values, one per source row.  All
/// columns are aligned by row index.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RawColumnStore(BTreeMap<ColumnKey, Vec<RawValue>>);

impl RawColumnStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add (or replace) a column
    pub fn insert<V: Into<RawValue>>(&mut self, key: ColumnKey, values: Vec<V>) {
        self.0
            .insert(key, values.into_iter().map(Into::into).collect());
    }

    /// All values of a column
    pub fn column(&self, key: &ColumnKey) -> Option<&[RawValue]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// The value at `row` in a column, `None` if the column is absent or too
    /// short
    pub fn value(&self, key: &ColumnKey, row: usize) -> Option<&RawValue> {
        self.0.get(key).and_then(|values| values.get(row))
    }

    /// Whether the store has a column for the key
    pub fn contains(&self, key: &ColumnKey) -> bool {
        self.0.contains_key(key)
    }
}

impl FromIterator<(ColumnKey, Vec<RawValue>)> for RawColumnStore {
    fn from_iter<I: IntoIterator<Item = (ColumnKey, Vec<RawValue>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
