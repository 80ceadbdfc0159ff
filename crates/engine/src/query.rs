// SPDX-License-Identifier: MIT

//!
//! Date range queries over a list of events.
//!
//! Each query is a full scan of the events it's given.  The views call
//! [`events_for_day`] once per displayed day, so a month view scans the list
//! around 42 times.  For large lists use an [`EventIndex`](crate::EventIndex),
//! which answers the same queries with the same results.
//!

use chrono::{NaiveDate, NaiveDateTime};
use sigma_calendar_core::Event;
use std::collections::BTreeMap;

/// Every event that spans `day`, i.e. the day falls on or between the days
/// the event starts and ends.  Results keep the order of `events`.
pub fn events_for_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.spans_day(day)).collect()
}

/// Every event that overlaps the closed interval `[start, end]`, comparing
/// exact date-times.  Results keep the order of `events`.
pub fn events_overlapping(
    events: &[Event],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.overlaps(start, end))
        .collect()
}

/// Events grouped by the day they start on
pub fn group_events_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        grouped.entry(event.start_day()).or_default().push(event);
    }
    grouped
}
