// SPDX-License-Identifier: MIT

//!
//! An index for answering date range queries over many events
//!

use chrono::{NaiveDate, NaiveDateTime};
use sigma_calendar_core::Event;

/// Events sorted by start, with the running maximum end alongside.  Answers
/// the same queries as [`events_for_day`](crate::events_for_day) and
/// [`events_overlapping`](crate::events_overlapping), in start order, without
/// scanning every event.
#[derive(Debug, Clone)]
pub struct EventIndex<'a> {
    /// Sorted by start (stable, so ties keep their original order)
    events: Vec<&'a Event>,

    /// `max_end[i]` is the latest end among `events[..=i]`
    max_end: Vec<NaiveDateTime>,
}

impl<'a> EventIndex<'a> {
    /// Index the events
    pub fn new(events: &'a [Event]) -> Self {
        let mut events: Vec<&Event> = events.iter().collect();
        events.sort_by_key(|event| event.start());

        let mut max_end = Vec::with_capacity(events.len());
        let mut latest: Option<NaiveDateTime> = None;
        for event in &events {
            let end = latest.map_or(event.end(), |latest| latest.max(event.end()));
            latest = Some(end);
            max_end.push(end);
        }

        Self { events, max_end }
    }

    /// The number of indexed events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether there are no indexed events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every event that spans `day`
    pub fn events_for_day(&self, day: NaiveDate) -> Vec<&'a Event> {
        let upper = self.events.partition_point(|event| event.start_day() <= day);
        let lower = self.max_end[..upper].partition_point(|end| end.date() < day);
        self.events[lower..upper]
            .iter()
            .copied()
            .filter(|event| event.spans_day(day))
            .collect()
    }

    /// Every event that overlaps the closed interval `[start, end]`
    pub fn events_overlapping(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<&'a Event> {
        let upper = self.events.partition_point(|event| event.start() <= end);
        let lower = self.max_end[..upper].partition_point(|max_end| *max_end < start);
        self.events[lower..upper]
            .iter()
            .copied()
            .filter(|event| event.overlaps(start, end))
            .collect()
    }
}
