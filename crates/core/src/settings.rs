// SPDX-License-Identifier: MIT

//!
//! User settings that affect how events are built and which dates are shown
//!

use crate::EventColour;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The calendar's views
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
    Year,
}

/// Which date the calendar initially shows
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DefaultStartDate {
    /// Today's date
    #[default]
    #[serde(rename = "today")]
    Today,

    /// The start of the earliest event
    #[serde(rename = "firstData")]
    FirstData,
}

/// The first day of the week.  Stored by the host as `0` (Sunday) or `1`
/// (Monday).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl Serialize for WeekStart {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value: u8 = match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        };
        serializer.serialize_u8(value)
    }
}

impl<'de> Deserialize<'de> for WeekStart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match u8::deserialize(deserializer)? {
            0 => Ok(WeekStart::Sunday),
            1 => Ok(WeekStart::Monday),
            other => Err(serde::de::Error::custom(format!(
                "week must start on 0 (Sunday) or 1 (Monday), not {other}"
            ))),
        }
    }
}

/// How clicking an event is handled by the views
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventInteractionMode {
    #[default]
    Auto,
    Tooltip,
    Modal,
    Both,
}

/// The calendar settings.  Every field has a default, so any subset of them
/// can be supplied.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// The view shown first
    pub default_view: CalendarView,

    /// The date shown first
    pub default_start_date: DefaultStartDate,

    /// The first day of the week in week and month views
    pub week_starts_on: WeekStart,

    /// Category to colour overrides
    pub custom_event_colors: BTreeMap<String, EventColour>,

    /// How event clicks are handled
    pub event_interaction_mode: EventInteractionMode,

    /// Whether hovering an event shows its tooltip
    pub show_event_tooltips: bool,

    /// Events shown in a month cell before a "more" link
    pub day_max_events: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_view: CalendarView::Month,
            default_start_date: DefaultStartDate::Today,
            week_starts_on: WeekStart::Sunday,
            custom_event_colors: BTreeMap::new(),
            event_interaction_mode: EventInteractionMode::Auto,
            show_event_tooltips: true,
            day_max_events: 3,
        }
    }
}

impl Settings {
    /// Load settings from the host's settings JSON text, merged over the
    /// defaults.  Blank text gives the defaults, as does text that isn't a
    /// JSON object (which is logged).  Each key is read on its own: a missing
    /// or invalid value takes its default without affecting the other keys,
    /// and an invalid custom colour only drops that one colour.
    pub fn from_config_json(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::default();
        }
        let config = match serde_json::from_str::<Map<String, Value>>(text) {
            Ok(config) => config,
            Err(err) => {
                error!("Invalid settings JSON, using defaults: {err}");
                return Self::default();
            }
        };

        let mut settings = Self::default();
        merge_field(&config, "defaultView", &mut settings.default_view);
        merge_field(&config, "defaultStartDate", &mut settings.default_start_date);
        merge_field(&config, "weekStartsOn", &mut settings.week_starts_on);
        merge_field(&config, "eventInteractionMode", &mut settings.event_interaction_mode);
        merge_field(&config, "showEventTooltips", &mut settings.show_event_tooltips);
        merge_field(&config, "dayMaxEvents", &mut settings.day_max_events);
        match config.get("customEventColors") {
            None | Some(Value::Null) => (),
            Some(Value::Object(colours)) => {
                settings.custom_event_colors = colours
                    .iter()
                    .filter_map(|(category, colour)| match colour {
                        Value::String(colour) => {
                            Some((category.clone(), EventColour::new(colour.as_str())))
                        }
                        other => {
                            warn!("Invalid colour for category `{category}`, ignored: {other}");
                            None
                        }
                    })
                    .collect();
            }
            Some(other) => warn!("Invalid setting `customEventColors`, using the default: {other}"),
        }

        info!("Settings loaded = {settings:?}");
        settings
    }

    /// The user's colour for a category, if they set a non-empty one
    pub fn custom_colour(&self, category: &str) -> Option<&EventColour> {
        self.custom_event_colors
            .get(category)
            .filter(|colour| !colour.as_str().is_empty())
    }
}

/// Overwrite `field` with the value under `key`, if there is one and it's
/// valid
fn merge_field<T: DeserializeOwned>(config: &Map<String, Value>, key: &str, field: &mut T) {
    let Some(value) = config.get(key) else {
        return;
    };
    match T::deserialize(value) {
        Ok(value) => *field = value,
        Err(err) => warn!("Invalid setting `{key}`, using the default: {err}"),
    }
}
