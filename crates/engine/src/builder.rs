// SPDX-License-Identifier: MIT

//!
//! Build one event from one row of raw column data
//!

use crate::colour::event_colour;
use log::{debug, trace, warn};
use sigma_calendar_core::{
    AdditionalFields, ColumnKey, ColumnRegistry, DEFAULT_CATEGORY, Event, EventId, EventParts,
    FieldMapping, RawColumnStore, RawValue, Settings, Title, is_all_day, parse_date,
};

/// The raw columns events are built from, looked up once per run.  A column
/// that is configured but has no data behaves as if every row were empty.
#[derive(Debug)]
pub(crate) struct EventColumns<'a> {
    title: &'a [RawValue],
    start: &'a [RawValue],
    end: Option<&'a [RawValue]>,
    description: Option<&'a [RawValue]>,
    category: Option<&'a [RawValue]>,
    id: Option<&'a [RawValue]>,

    /// `(display name, values)` for each additional field present in the data
    additional: Vec<(&'a str, &'a [RawValue])>,
}

impl<'a> EventColumns<'a> {
    /// Look up the mapped columns.  Returns `None` if the title or start date
    /// isn't mapped.
    pub(crate) fn resolve(
        data: &'a RawColumnStore,
        mapping: &'a FieldMapping,
        registry: &'a ColumnRegistry,
    ) -> Option<Self> {
        let column = |key: &Option<ColumnKey>| -> Option<&'a [RawValue]> {
            key.as_ref().map(|key| data.column(key).unwrap_or_default())
        };

        let additional = mapping
            .event_fields
            .iter()
            .filter_map(|key| {
                data.column(key)
                    .map(|values| (registry.column_name(key), values))
            })
            .collect();

        Some(Self {
            title: column(&mapping.title)?,
            start: column(&mapping.start_date)?,
            end: column(&mapping.end_date),
            description: column(&mapping.description),
            category: column(&mapping.category),
            id: column(&mapping.id),
            additional,
        })
    }

    /// The number of source rows (the length of the title column)
    pub(crate) fn row_count(&self) -> usize {
        self.title.len()
    }

    /// Whether there is nothing to build events from
    pub(crate) fn is_empty(&self) -> bool {
        self.title.is_empty() || self.start.is_empty()
    }
}

/// Get a row's value from an optional column
fn cell<'a>(column: Option<&'a [RawValue]>, row: usize) -> Option<&'a RawValue> {
    column.and_then(|values| values.get(row))
}

/// Build the event for `row`, or `None` if the row has no title, no start
/// date, or a start date that can't be parsed.  Every other problem is
/// recovered from.
pub(crate) fn build_event(
    columns: &EventColumns<'_>,
    row: usize,
    settings: &Settings,
) -> Option<Event> {
    let raw_title = cell(Some(columns.title), row).and_then(RawValue::truthy);
    let raw_start = cell(Some(columns.start), row).and_then(RawValue::truthy);
    let (Some(raw_title), Some(raw_start)) = (raw_title, raw_start) else {
        trace!("Skipping row {row}: no title or start date");
        return None;
    };

    let start = match parse_date(raw_start) {
        Ok(start) => start,
        Err(err) => {
            warn!("Invalid start date at index {row}: {err}");
            return None;
        }
    };

    // Fall back to the start when the end is missing or unusable
    let raw_end = cell(columns.end, row).and_then(RawValue::truthy);
    let end = match raw_end.map(parse_date) {
        Some(Ok(end)) => end,
        Some(Err(err)) => {
            debug!("Invalid end date at index {row}, using the start date: {err}");
            start
        }
        None => start,
    };

    let title = Title::from(raw_title).ok()?;

    let category = cell(columns.category, row)
        .and_then(RawValue::truthy)
        .map_or_else(|| String::from(DEFAULT_CATEGORY), ToString::to_string);

    let description = cell(columns.description, row)
        .and_then(RawValue::truthy)
        .map(ToString::to_string)
        .unwrap_or_default();

    let id = match cell(columns.id, row) {
        Some(value) if !value.is_null() => EventId::Column(value.to_string()),
        _ => EventId::Row(row),
    };

    let additional_fields: AdditionalFields = columns
        .additional
        .iter()
        .filter_map(|(name, values)| {
            values
                .get(row)
                .filter(|value| !value.is_null())
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect();

    let colour = event_colour(&category, settings);

    Some(Event::from(EventParts {
        id,
        title,
        start,
        end,
        all_day: is_all_day(Some(raw_start), raw_end),
        description,
        category,
        colour,
        additional_fields,
        original_index: row,
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use sigma_calendar_core::ColumnInfo;
    use sigma_calendar_macros::datetime;

    fn key(key: &str) -> ColumnKey {
        ColumnKey::from(key).unwrap()
    }

    fn registry() -> ColumnRegistry {
        ColumnRegistry::from_iter([
            (key("t"), ColumnInfo::new("Title", "text")),
            (key("s"), ColumnInfo::new("Start", "datetime")),
            (key("e"), ColumnInfo::new("End", "datetime")),
            (key("c"), ColumnInfo::new("Category", "text")),
            (key("d"), ColumnInfo::new("Notes", "text")),
            (key("i"), ColumnInfo::new("Ticket", "text")),
            (key("owner"), ColumnInfo::new("Owner", "text")),
        ])
    }

    fn data() -> RawColumnStore {
        let mut data = RawColumnStore::new();
        data.insert(
            key("t"),
            vec![RawValue::from("Standup"), RawValue::from(""), RawValue::Number(7.0)],
        );
        data.insert(
            key("s"),
            vec![
                RawValue::from("2024-01-15T09:00:00"),
                RawValue::from("2024-01-16"),
                RawValue::from("2024-01-17"),
            ],
        );
        data.insert(
            key("e"),
            vec![RawValue::from("2024-01-15T09:15:00"), RawValue::Null, RawValue::from("??")],
        );
        data.insert(
            key("c"),
            vec![RawValue::from("Meeting"), RawValue::Null, RawValue::Number(0.0)],
        );
        data.insert(key("d"), vec![RawValue::from("Daily sync"), RawValue::Null, RawValue::Null]);
        data.insert(key("i"), vec![RawValue::from("T-1"), RawValue::Null, RawValue::Number(0.0)]);
        data.insert(
            key("owner"),
            vec![RawValue::from("Ada"), RawValue::Null, RawValue::Number(3.0)],
        );
        data
    }

    fn mapping() -> FieldMapping {
        FieldMapping {
            id: Some(key("i")),
            title: Some(key("t")),
            start_date: Some(key("s")),
            end_date: Some(key("e")),
            description: Some(key("d")),
            category: Some(key("c")),
            event_fields: vec![key("owner"), key("not-in-data")],
        }
    }

    #[test]
    fn full_row() {
        let (data, mapping, registry) = (data(), mapping(), registry());
        let columns = EventColumns::resolve(&data, &mapping, &registry).unwrap();
        assert_eq!(columns.row_count(), 3);

        let event = build_event(&columns, 0, &Settings::default()).unwrap();
        assert_eq!(event.id(), &EventId::Column(String::from("T-1")));
        assert_eq!(event.title().as_str(), "Standup");
        assert_eq!(event.start(), datetime!("2024-01-15T09:00:00"));
        assert_eq!(event.end(), datetime!("2024-01-15T09:15:00"));
        assert!(!event.is_all_day());
        assert_eq!(event.description(), "Daily sync");
        assert_eq!(event.category(), "Meeting");
        assert_eq!(event.original_index(), 0);
        assert_eq!(
            event.additional_fields(),
            &AdditionalFields::from_iter([("Owner", "Ada")])
        );
    }

    #[test]
    fn empty_title_is_skipped() {
        let (data, mapping, registry) = (data(), mapping(), registry());
        let columns = EventColumns::resolve(&data, &mapping, &registry).unwrap();
        assert!(build_event(&columns, 1, &Settings::default()).is_none());
    }

    #[test]
    fn defaults_and_fallbacks() {
        let (data, mapping, registry) = (data(), mapping(), registry());
        let columns = EventColumns::resolve(&data, &mapping, &registry).unwrap();
        let event = build_event(&columns, 2, &Settings::default()).unwrap();

        // Numeric title is stringified
        assert_eq!(event.title().as_str(), "7");

        // Unparseable end falls back to the start
        assert_eq!(event.end(), event.start());
        assert!(event.is_all_day());

        // Falsy category/description take their defaults, but a zero ID is kept
        assert_eq!(event.category(), DEFAULT_CATEGORY);
        assert_eq!(event.description(), "");
        assert_eq!(event.id(), &EventId::Column(String::from("0")));
        assert_eq!(
            event.additional_fields(),
            &AdditionalFields::from_iter([("Owner", "3")])
        );
    }

    #[test]
    fn row_index_id_and_missing_columns() {
        let data = data();
        let registry = registry();
        let mapping = FieldMapping {
            category: Some(key("not-in-data")),
            ..FieldMapping::new(key("t"), key("s"))
        };
        let columns = EventColumns::resolve(&data, &mapping, &registry).unwrap();
        let event = build_event(&columns, 0, &Settings::default()).unwrap();
        assert_eq!(event.id(), &EventId::Row(0));
        assert_eq!(event.category(), DEFAULT_CATEGORY);
        assert_eq!(event.end(), event.start());
        assert!(event.additional_fields().is_empty());
    }

    #[test]
    fn additional_fields_follow_configured_order() {
        let mut data = RawColumnStore::new();
        data.insert(key("t"), vec!["A"]);
        data.insert(key("s"), vec!["2024-01-15"]);
        data.insert(key("z"), vec!["North"]);
        data.insert(key("a"), vec!["Ops"]);
        let registry = ColumnRegistry::from_iter([
            (key("t"), ColumnInfo::new("Title", "text")),
            (key("s"), ColumnInfo::new("Start", "datetime")),
            (key("z"), ColumnInfo::new("Zone", "text")),
            (key("a"), ColumnInfo::new("Area", "text")),
        ]);
        let mapping = FieldMapping {
            event_fields: vec![key("z"), key("a")],
            ..FieldMapping::new(key("t"), key("s"))
        };
        let columns = EventColumns::resolve(&data, &mapping, &registry).unwrap();
        let event = build_event(&columns, 0, &Settings::default()).unwrap();
        assert_eq!(
            event.additional_fields().iter().collect::<Vec<_>>(),
            vec![("Zone", "North"), ("Area", "Ops")]
        );
    }

    #[test]
    fn invalid_start_is_skipped() {
        let mut data = RawColumnStore::new();
        data.insert(key("t"), vec!["A", "B"]);
        data.insert(key("s"), vec!["yesterday-ish", "2024-01-15"]);
        let mapping = FieldMapping::new(key("t"), key("s"));
        let registry = registry();
        let columns = EventColumns::resolve(&data, &mapping, &registry).unwrap();

        assert!(build_event(&columns, 0, &Settings::default()).is_none());
        assert!(build_event(&columns, 1, &Settings::default()).is_some());

        // Past the end of the data
        assert!(build_event(&columns, 2, &Settings::default()).is_none());
    }

    #[test]
    fn unmapped_title_does_not_resolve() {
        let data = data();
        let registry = registry();
        let mapping = FieldMapping::default();
        assert!(EventColumns::resolve(&data, &mapping, &registry).is_none());
    }
}
