// SPDX-License-Identifier: MIT

//!
//! Clicks on the calendar, and what the host must do in response
//!

use chrono::NaiveDate;
use serde::Serialize;
use sigma_calendar_core::EventId;

/// Interaction events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CalendarInteractionEvent {
    /// An event was clicked on the given day
    EventClick(EventId, NaiveDate),

    /// An empty part of a day was clicked
    DateClick(NaiveDate),
}

/// The host variables to set (and whether to fire the click action) for an
/// interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostUpdate {
    /// The selected event ID variable (empty when no event was clicked)
    pub selected_event_id: String,

    /// The selected date variable, as `YYYY-MM-DD`
    pub selected_date: String,

    /// Whether the host's click action should fire (only for clicks on events
    /// with a non-empty ID)
    pub trigger_action: bool,
}

impl From<&CalendarInteractionEvent> for HostUpdate {
    fn from(event: &CalendarInteractionEvent) -> Self {
        let (selected_event_id, date) = match event {
            CalendarInteractionEvent::EventClick(id, date) => (id.to_string(), date),
            CalendarInteractionEvent::DateClick(date) => (String::new(), date),
        };

        // An event with an empty ID counts as a click on the date
        let trigger_action = !selected_event_id.is_empty();
        Self {
            selected_event_id,
            selected_date: date.format("%Y-%m-%d").to_string(),
            trigger_action,
        }
    }
}
