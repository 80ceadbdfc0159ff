// SPDX-License-Identifier: MIT

//!
//! Date parsing and all-day inference for raw cell values
//!

use crate::RawValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use thiserror::Error;

/// Date-time formats tried, in order, for text values without an offset
const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only formats tried, in order, for text values (midnight is implied)
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Errors that can arise when turning a [`RawValue`] into a date-time
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateParseError {
    /// Null, empty, zero, or false
    #[error("No date value")]
    Absent,

    /// The value is not a type that can hold a date
    #[error("`{0}` cannot hold a date")]
    UnsupportedType(String),

    /// Text that matched none of the supported formats
    #[error("`{0}` is not a recognised date")]
    Unrecognised(String),

    /// A number that isn't a representable millisecond timestamp
    #[error("`{0}` is out of range for a timestamp")]
    OutOfRange(f64),
}

/// Turn a raw cell value into a date-time.
///
/// Native date-times are accepted as they are.  Numbers are milliseconds since
/// the Unix epoch.  Text is tried against ISO-8601/RFC 3339 and a few common
/// date forms, with offsets converted to UTC.
pub fn parse_date(value: &RawValue) -> Result<NaiveDateTime, DateParseError> {
    match value.truthy() {
        None => Err(DateParseError::Absent),
        Some(RawValue::DateTime(datetime)) => Ok(*datetime),
        Some(RawValue::Number(millis)) => from_epoch_millis(*millis),
        Some(RawValue::Text(text)) => parse_date_str(text),
        Some(other) => Err(DateParseError::UnsupportedType(other.to_string())),
    }
}

/// Interpret a number of milliseconds since the Unix epoch
pub fn from_epoch_millis(millis: f64) -> Result<NaiveDateTime, DateParseError> {
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(DateParseError::OutOfRange(millis));
    }
    DateTime::from_timestamp_millis(millis.trunc() as i64)
        .map(|datetime| datetime.naive_utc())
        .ok_or(DateParseError::OutOfRange(millis))
}

/// Parse text as a date-time
pub fn parse_date_str(text: &str) -> Result<NaiveDateTime, DateParseError> {
    let trimmed = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.naive_utc());
    }

    if let Ok(datetime) = DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Ok(datetime.naive_utc());
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Ok(datetime);
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DateParseError::Unrecognised(text.to_string()))
}

/// Whether a raw value parses to a date-time that isn't exactly midnight.
/// Absent and unparseable values have no time component.
pub fn has_time_component(value: Option<&RawValue>) -> bool {
    value
        .and_then(|value| parse_date(value).ok())
        .is_some_and(|datetime| {
            datetime.hour() != 0 || datetime.minute() != 0 || datetime.second() != 0
        })
}

/// An event is all-day when neither its raw start nor its raw end value carry
/// a time of day
pub fn is_all_day(start: Option<&RawValue>, end: Option<&RawValue>) -> bool {
    !has_time_component(start) && !has_time_component(end)
}
