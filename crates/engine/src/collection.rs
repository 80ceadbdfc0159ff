// SPDX-License-Identifier: MIT

//!
//! The assembled, sorted collection of events handed to the views
//!

use chrono::NaiveDateTime;
use serde::Serialize;
use sigma_calendar_core::Event;

/// The span from the first event's start to the last event's end (in start
/// order, so this is not necessarily the latest end)
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Summary numbers for a run of the pipeline
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarStats {
    /// The number of events produced
    pub total_events: usize,

    /// The number of source rows scanned (including skipped rows)
    pub total_rows: usize,

    /// `None` when no events were produced
    pub date_range: Option<DateRange>,
}

/// Every event produced by one run, sorted by start, along with the distinct
/// categories and summary stats.  Built fresh on each run and never changed
/// afterwards.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CalendarCollection {
    events: Vec<Event>,
    categories: Vec<String>,
    stats: CalendarStats,
}

impl CalendarCollection {
    /// Assemble a collection from events in source row order.
    ///
    /// Categories are collected in the order first seen in that row order.
    /// Events are then sorted by start (the sort is stable, so events with the
    /// same start stay in row order).
    pub fn assemble(mut events: Vec<Event>, total_rows: usize) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for event in &events {
            if !categories.iter().any(|known| known == event.category()) {
                categories.push(event.category().to_string());
            }
        }

        events.sort_by_key(Event::start);

        let date_range = match (events.first(), events.last()) {
            (Some(first), Some(last)) => Some(DateRange {
                start: first.start(),
                end: last.end(),
            }),
            _ => None,
        };

        let stats = CalendarStats {
            total_events: events.len(),
            total_rows,
            date_range,
        };

        Self {
            events,
            categories,
            stats,
        }
    }

    /// The events, sorted by start
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The distinct categories, in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The summary stats
    pub fn stats(&self) -> &CalendarStats {
        &self.stats
    }

    /// Take ownership of the events
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sigma_calendar_core::{AdditionalFields, EventColour, EventId, EventParts, Title};
    use sigma_calendar_macros::datetime;

    fn event(row: usize, category: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::from(EventParts {
            id: EventId::Row(row),
            title: Title::from(format!("Event {row}")).unwrap(),
            start,
            end,
            all_day: false,
            description: String::new(),
            category: category.to_string(),
            colour: EventColour::from("#3788d8"),
            additional_fields: AdditionalFields::new(),
            original_index: row,
        })
    }

    #[test]
    fn assemble() {
        let events = vec![
            event(0, "Meeting", datetime!("2024-01-20"), datetime!("2024-01-21")),
            event(1, "Review", datetime!("2024-01-05"), datetime!("2024-01-30")),
            event(2, "Meeting", datetime!("2024-01-10"), datetime!("2024-01-10")),
            event(3, "Launch", datetime!("2024-01-10"), datetime!("2024-01-11")),
        ];
        let collection = CalendarCollection::assemble(events, 6);

        let rows: Vec<usize> = collection
            .events()
            .iter()
            .map(Event::original_index)
            .collect();
        assert_eq!(rows, vec![1, 2, 3, 0]);

        assert_eq!(collection.categories(), &["Meeting", "Review", "Launch"]);
        assert_eq!(collection.stats().total_events, 4);
        assert_eq!(collection.stats().total_rows, 6);

        // The range ends at the last event's end, not the latest end
        assert_eq!(
            collection.stats().date_range,
            Some(DateRange {
                start: datetime!("2024-01-05"),
                end: datetime!("2024-01-21"),
            })
        );
    }

    #[test]
    fn assemble_empty() {
        let collection = CalendarCollection::assemble(Vec::new(), 3);
        assert!(collection.events().is_empty());
        assert!(collection.categories().is_empty());
        assert_eq!(collection.stats().total_rows, 3);
        assert_eq!(collection.stats().date_range, None);
    }
}
