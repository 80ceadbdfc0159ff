// SPDX-License-Identifier: MIT

//!
//! The calendar event type
//!

use crate::{EventColour, EventId, Title};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

/// The category given to events without one
pub const DEFAULT_CATEGORY: &str = "Default";

/// A single calendar event, built from one source row.
///
/// Events are never modified once built.  Note that `end` is not guaranteed
/// to be on or after `start`: whatever the source row holds is kept.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    id: EventId,
    title: Title,
    start: NaiveDateTime,
    end: NaiveDateTime,
    all_day: bool,
    description: String,
    category: String,
    #[serde(rename = "color")]
    colour: EventColour,
    additional_fields: AdditionalFields,
    original_index: usize,
}

/// An event's extra fields as `(display name, value)` pairs, in the order the
/// columns were configured.  Serialises as a JSON object in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdditionalFields(Vec<(String, String)>);

impl AdditionalFields {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a field.  A name that's already set keeps its position and takes
    /// the new value.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let (name, value) = (name.into(), value.into());
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((name, value)),
        }
    }

    /// The value of the named field
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AdditionalFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (name, value) in iter {
            fields.insert(name, value);
        }
        fields
    }
}

impl Serialize for AdditionalFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// Everything needed to build an [`Event`]
#[derive(Clone, Debug)]
pub struct EventParts {
    pub id: EventId,
    pub title: Title,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
    pub description: String,
    pub category: String,
    pub colour: EventColour,
    pub additional_fields: AdditionalFields,
    pub original_index: usize,
}

impl From<EventParts> for Event {
    fn from(parts: EventParts) -> Self {
        Self {
            id: parts.id,
            title: parts.title,
            start: parts.start,
            end: parts.end,
            all_day: parts.all_day,
            description: parts.description,
            category: parts.category,
            colour: parts.colour,
            additional_fields: parts.additional_fields,
            original_index: parts.original_index,
        }
    }
}

impl Event {
    /// Get the event's ID
    pub fn id(&self) -> &EventId {
        &self.id
    }

    /// Get the event's title
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// When the event starts
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// When the event ends (the start, if the row had no usable end)
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The calendar day the event starts on
    pub fn start_day(&self) -> NaiveDate {
        self.start.date()
    }

    /// The calendar day the event ends on
    pub fn end_day(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whether the event has no time of day
    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    /// The event's description (empty if there is none)
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The event's category ([`DEFAULT_CATEGORY`] if there is none)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The event's display colour
    pub fn colour(&self) -> &EventColour {
        &self.colour
    }

    /// Extra fields, keyed by column display name
    pub fn additional_fields(&self) -> &AdditionalFields {
        &self.additional_fields
    }

    /// The zero-based row the event was built from
    pub fn original_index(&self) -> usize {
        self.original_index
    }

    /// Whether `day` falls within the days the event spans (inclusive)
    pub fn spans_day(&self, day: NaiveDate) -> bool {
        self.start_day() <= day && day <= self.end_day()
    }

    /// Whether the event overlaps the closed interval `[start, end]`
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start <= end && self.end >= start
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sigma_calendar_macros::{date, datetime};

    fn event(start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::from(EventParts {
            id: EventId::Row(0),
            title: Title::from("Offsite").unwrap(),
            start,
            end,
            all_day: false,
            description: String::new(),
            category: String::from(DEFAULT_CATEGORY),
            colour: EventColour::from("#3788d8"),
            additional_fields: AdditionalFields::new(),
            original_index: 0,
        })
    }

    #[test]
    fn spans_day() {
        let offsite = event(datetime!("2024-01-20T09:00:00"), datetime!("2024-01-22T17:00:00"));
        assert!(!offsite.spans_day(date!("2024-01-19")));
        assert!(offsite.spans_day(date!("2024-01-20")));
        assert!(offsite.spans_day(date!("2024-01-21")));
        assert!(offsite.spans_day(date!("2024-01-22")));
        assert!(!offsite.spans_day(date!("2024-01-23")));
    }

    #[test]
    fn overlaps() {
        let offsite = event(datetime!("2024-01-10"), datetime!("2024-01-12"));
        assert!(offsite.overlaps(datetime!("2024-01-11"), datetime!("2024-01-11")));
        assert!(offsite.overlaps(datetime!("2024-01-12"), datetime!("2024-01-20")));
        assert!(!offsite.overlaps(datetime!("2024-01-13"), datetime!("2024-01-20")));
        assert!(!offsite.overlaps(datetime!("2024-01-01"), datetime!("2024-01-09T23:59:59")));
    }

    #[test]
    fn end_before_start_is_kept() {
        let backwards = event(datetime!("2024-01-12"), datetime!("2024-01-10"));
        assert!(backwards.end() < backwards.start());
        assert!(!backwards.spans_day(date!("2024-01-11")));
    }

    #[test]
    fn serialisation() {
        let json = serde_json::to_value(event(datetime!("2024-01-10"), datetime!("2024-01-10")))
            .unwrap();
        assert_eq!(json["id"], 0);
        assert_eq!(json["title"], "Offsite");
        assert_eq!(json["start"], "2024-01-10T00:00:00");
        assert_eq!(json["allDay"], false);
        assert_eq!(json["color"], "#3788d8");
        assert_eq!(json["originalIndex"], 0);
    }

    #[test]
    fn additional_fields_keep_order() {
        let fields = AdditionalFields::from_iter([
            ("Priority", "High"),
            ("Assignee", "Ada"),
            ("Priority", "Low"),
        ]);
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("Priority"), Some("Low"));
        assert_eq!(fields.get("Owner"), None);
        assert_eq!(
            fields.iter().collect::<Vec<_>>(),
            vec![("Priority", "Low"), ("Assignee", "Ada")]
        );
        assert_eq!(
            serde_json::to_string(&fields).unwrap(),
            r#"{"Priority":"Low","Assignee":"Ada"}"#
        );
    }
}
