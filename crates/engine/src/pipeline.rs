// SPDX-License-Identifier: MIT

//!
//! Turn raw column data into a [`CalendarCollection`]
//!

use crate::builder::{EventColumns, build_event};
use crate::collection::CalendarCollection;
use log::{debug, warn};
use sigma_calendar_core::{ColumnKey, ColumnRegistry, FieldMapping, RawColumnStore, Settings};
use thiserror::Error;

/// Reasons no collection could be produced at all.  These all mean the
/// calendar hasn't been configured enough yet, and should be shown as a prompt
/// to finish configuring rather than as a failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("No data was supplied")]
    MissingData,

    #[error("No event title column is configured")]
    MissingTitleMapping,

    #[error("No start date column is configured")]
    MissingStartDateMapping,

    #[error("No column information was supplied")]
    MissingColumnRegistry,

    #[error("Columns not found: {}", join_keys(.0))]
    MissingColumns(Vec<ColumnKey>),

    #[error("The title or start date column has no rows")]
    NoRows,
}

fn join_keys(keys: &[ColumnKey]) -> String {
    keys.iter()
        .map(ColumnKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build every event from the raw data and assemble them into a collection.
///
/// Problems with the inputs as a whole are returned as a [`PipelineError`].
/// Problems with individual rows are logged: rows without a title or a usable
/// start date are dropped, and other missing values take defaults.
pub fn process_calendar_data(
    data: Option<&RawColumnStore>,
    mapping: &FieldMapping,
    settings: &Settings,
    registry: Option<&ColumnRegistry>,
) -> Result<CalendarCollection, PipelineError> {
    let result = process(data, mapping, settings, registry);
    if let Err(err) = &result {
        warn!("Calendar data not processed: {err}");
    }
    result
}

fn process(
    data: Option<&RawColumnStore>,
    mapping: &FieldMapping,
    settings: &Settings,
    registry: Option<&ColumnRegistry>,
) -> Result<CalendarCollection, PipelineError> {
    let data = data.ok_or(PipelineError::MissingData)?;
    if mapping.title.is_none() {
        return Err(PipelineError::MissingTitleMapping);
    }
    if mapping.start_date.is_none() {
        return Err(PipelineError::MissingStartDateMapping);
    }
    let registry = registry.ok_or(PipelineError::MissingColumnRegistry)?;

    let validation = registry.validate_required(&mapping.required_columns());
    if !validation.is_valid() {
        return Err(PipelineError::MissingColumns(
            validation.into_missing_columns(),
        ));
    }

    let columns =
        EventColumns::resolve(data, mapping, registry).ok_or(PipelineError::MissingTitleMapping)?;
    if columns.is_empty() {
        return Err(PipelineError::NoRows);
    }

    let row_count = columns.row_count();
    let events = (0..row_count)
        .filter_map(|row| build_event(&columns, row, settings))
        .collect();

    let collection = CalendarCollection::assemble(events, row_count);
    debug!(
        "Processed {} events from {} rows",
        collection.stats().total_events,
        row_count
    );
    Ok(collection)
}
