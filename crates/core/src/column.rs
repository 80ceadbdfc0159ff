// SPDX-License-Identifier: MIT

//!
//! Column keys, the host's column registry, and the lookups made against it
//!

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The type reported for columns the registry knows nothing about
pub const UNKNOWN_COLUMN_TYPE: &str = "unknown";

/// Errors that can arise in relation to a [`ColumnKey`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColumnKeyError {
    #[error("Column key cannot be empty")]
    Empty,
}

/// The identifier the host uses to address one bound data column.  The value
/// can be any string apart from one which when trimmed is empty.
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Create and initialise a new column key if it will be valid
    pub fn from<S: ToString>(key: S) -> Result<Self, ColumnKeyError> {
        let key = key.to_string();
        if key.trim().is_empty() {
            Err(ColumnKeyError::Empty)
        } else {
            Ok(ColumnKey(key))
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ColumnKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        ColumnKey::from(string).map_err(serde::de::Error::custom)
    }
}

/// What the host knows about a single column
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnInfo {
    /// Human readable column name
    #[serde(default)]
    pub name: String,

    /// The host's type for the column (e.g. `"datetime"`, `"text"`)
    #[serde(default, rename = "columnType", alias = "type")]
    pub column_type: String,
}

impl ColumnInfo {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, column_type: T) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// The outcome of checking a set of column keys against a [`ColumnRegistry`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnValidation {
    /// Keys which have no registered name, in the order they were asked about
    missing: Vec<ColumnKey>,
}

impl ColumnValidation {
    /// Whether every required column is registered
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// The keys with no registered name
    pub fn missing_columns(&self) -> &[ColumnKey] {
        &self.missing
    }

    /// Take ownership of the missing keys
    pub fn into_missing_columns(self) -> Vec<ColumnKey> {
        self.missing
    }
}

/// Mapping from column key to [`ColumnInfo`], supplied by the host.  Read-only
/// as far as the calendar is concerned.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColumnRegistry(BTreeMap<ColumnKey, ColumnInfo>);

impl ColumnRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Register (or replace) a column
    pub fn insert(&mut self, key: ColumnKey, info: ColumnInfo) {
        self.0.insert(key, info);
    }

    /// Get everything known about a column
    pub fn get(&self, key: &ColumnKey) -> Option<&ColumnInfo> {
        self.0.get(key)
    }

    /// The number of registered columns
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no columns are registered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check that every key is registered with a non-empty name.  Presence in
    /// the raw data does not count; only the registry is consulted.
    pub fn validate_required(&self, required: &[ColumnKey]) -> ColumnValidation {
        let missing = required
            .iter()
            .filter(|key| self.get(key).is_none_or(|info| info.name.is_empty()))
            .cloned()
            .collect();
        ColumnValidation { missing }
    }

    /// The display name for a column, falling back to the key itself when the
    /// column isn't registered (or has no name)
    pub fn column_name<'a>(&'a self, key: &'a ColumnKey) -> &'a str {
        match self.get(key) {
            Some(info) if !info.name.is_empty() => &info.name,
            _ => key.as_str(),
        }
    }

    /// The column's type, or [`UNKNOWN_COLUMN_TYPE`]
    pub fn column_type(&self, key: &ColumnKey) -> &str {
        match self.get(key) {
            Some(info) if !info.column_type.is_empty() => &info.column_type,
            _ => UNKNOWN_COLUMN_TYPE,
        }
    }
}

impl FromIterator<(ColumnKey, ColumnInfo)> for ColumnRegistry {
    fn from_iter<I: IntoIterator<Item = (ColumnKey, ColumnInfo)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
