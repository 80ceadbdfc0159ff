// SPDX-License-Identifier: MIT

//!
//! The field mapping: which column plays which role in an event
//!

use crate::ColumnKey;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Problems with a [`FieldMapping`] that must be fixed before any events can
/// be produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("Event title column is required")]
    MissingTitle,

    #[error("Start date column is required")]
    MissingStartDate,
}

/// Links each logical event field to the column holding its values.  Only the
/// title and start date are required for events to be produced.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Column holding each event's ID
    #[serde(rename = "ID", default, deserialize_with = "optional_column_key")]
    pub id: Option<ColumnKey>,

    /// Column holding each event's title
    #[serde(default, deserialize_with = "optional_column_key")]
    pub title: Option<ColumnKey>,

    /// Column holding each event's start date
    #[serde(default, deserialize_with = "optional_column_key")]
    pub start_date: Option<ColumnKey>,

    /// Column holding each event's end date
    #[serde(default, deserialize_with = "optional_column_key")]
    pub end_date: Option<ColumnKey>,

    /// Column holding each event's description
    #[serde(default, deserialize_with = "optional_column_key")]
    pub description: Option<ColumnKey>,

    /// Column holding each event's category
    #[serde(default, deserialize_with = "optional_column_key")]
    pub category: Option<ColumnKey>,

    /// Extra columns shown alongside each event
    #[serde(default, deserialize_with = "column_key_list")]
    pub event_fields: Vec<ColumnKey>,
}

impl FieldMapping {
    /// Create a mapping with just the two required fields set
    pub fn new(title: ColumnKey, start_date: ColumnKey) -> Self {
        Self {
            title: Some(title),
            start_date: Some(start_date),
            ..Self::default()
        }
    }

    /// Every problem that prevents events from being produced (empty if none)
    pub fn problems(&self) -> Vec<MappingError> {
        let mut problems = Vec::new();
        if self.title.is_none() {
            problems.push(MappingError::MissingTitle);
        }
        if self.start_date.is_none() {
            problems.push(MappingError::MissingStartDate);
        }
        problems
    }

    /// All configured columns, each of which must be registered with the host.
    /// Title and start date come first, followed by the optional columns that
    /// are set.
    pub fn required_columns(&self) -> Vec<ColumnKey> {
        [
            &self.title,
            &self.start_date,
            &self.id,
            &self.end_date,
            &self.description,
            &self.category,
        ]
        .into_iter()
        .flatten()
        .chain(self.event_fields.iter())
        .cloned()
        .collect()
    }
}

/// Hosts send unset column fields as `null` or `""`, both of which mean "not
/// configured"
fn optional_column_key<'de, D>(deserializer: D) -> Result<Option<ColumnKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let key = Option::<String>::deserialize(deserializer)?;
    Ok(key.and_then(|key| ColumnKey::from(key).ok()))
}

/// Accepts `null`, a single key, or a list of keys (blank entries dropped)
fn column_key_list<'de, D>(deserializer: D) -> Result<Vec<ColumnKey>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let keys = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(key)) => vec![key],
        Some(OneOrMany::Many(keys)) => keys,
    };
    Ok(keys
        .into_iter()
        .filter_map(|key| ColumnKey::from(key).ok())
        .collect())
}
