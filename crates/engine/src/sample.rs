// SPDX-License-Identifier: MIT

//!
//! Random sample events, for trying out views without real data
//!

use crate::collection::CalendarCollection;
use chrono::{Days, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;
use sigma_calendar_core::{AdditionalFields, Event, EventColour, EventId, EventParts, Title};

/// Sample categories and their colours
const SAMPLE_CATEGORIES: [(&str, &str); 5] = [
    ("Meeting", "#3788d8"),
    ("Task", "#f97316"),
    ("Deadline", "#ef4444"),
    ("Event", "#22c55e"),
    ("Review", "#8b5cf6"),
];

const SAMPLE_PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];

const SAMPLE_ASSIGNEES: [&str; 3] = ["John Doe", "Jane Smith", "Bob Johnson"];

/// Generate `count` events starting within 30 days of `start`.  About a third
/// of them last a few days.
pub fn generate_sample_events<R: Rng>(
    start: NaiveDateTime,
    count: usize,
    rng: &mut R,
) -> CalendarCollection {
    let events: Vec<Event> = (0..count)
        .filter_map(|i| {
            let event_start = start + Days::new(rng.gen_range(0..30));
            let event_end = if rng.gen_bool(0.3) {
                event_start + Days::new(rng.gen_range(1..=3))
            } else {
                event_start
            };
            let (category, colour) =
                SAMPLE_CATEGORIES[rng.gen_range(0..SAMPLE_CATEGORIES.len())];

            let mut additional_fields = AdditionalFields::new();
            if let Some(priority) = SAMPLE_PRIORITIES.choose(rng) {
                additional_fields.insert("Priority", *priority);
            }
            if let Some(assignee) = SAMPLE_ASSIGNEES.choose(rng) {
                additional_fields.insert("Assignee", *assignee);
            }

            Some(Event::from(EventParts {
                id: EventId::Row(i + 1),
                title: Title::from(format!("Sample Event {}", i + 1)).ok()?,
                start: event_start,
                end: event_end,
                all_day: rng.gen_bool(0.5),
                description: format!("This is a sample event description for event {}", i + 1),
                category: category.to_string(),
                colour: EventColour::from(colour),
                additional_fields,
                original_index: i,
            }))
        })
        .collect();

    CalendarCollection::assemble(events, count)
}
