// SPDX-License-Identifier: MIT

//!
//! Derive an event's colour from its category
//!

use sigma_calendar_core::{EventColour, Settings};

/// Used when an event has no category
pub const DEFAULT_EVENT_COLOUR: &str = "#3788d8";

/// Saturation used for colours derived from a category name
const DERIVED_SATURATION: u8 = 65;

/// Lightness used for colours derived from a category name
const DERIVED_LIGHTNESS: u8 = 55;

/// Built in colours for common status/priority categories.  Matched against
/// the lower-cased category.
const KEYWORD_COLOURS: [(&str, &str); 8] = [
    ("urgent", "#ef4444"),
    ("high", "#f97316"),
    ("medium", "#eab308"),
    ("low", "#22c55e"),
    ("completed", "#22c55e"),
    ("in progress", "#3b82f6"),
    ("todo", "#6b7280"),
    ("cancelled", "#6b7280"),
];

/// Get the colour for an event in the given category.  In order of
/// preference:
///
/// 1. [`DEFAULT_EVENT_COLOUR`] for an empty category
/// 2. The user's custom colour for the exact category
/// 3. The built in colour for a known keyword (case insensitive)
/// 4. An HSL colour with a hue derived from the category name
pub fn event_colour(category: &str, settings: &Settings) -> EventColour {
    if category.is_empty() {
        return EventColour::from(DEFAULT_EVENT_COLOUR);
    }

    if let Some(colour) = settings.custom_colour(category) {
        return colour.clone();
    }

    if let Some(colour) = keyword_colour(category) {
        return EventColour::from(colour);
    }

    EventColour::new(format!(
        "hsl({}, {DERIVED_SATURATION}%, {DERIVED_LIGHTNESS}%)",
        category_hue(category)
    ))
}

/// The built in colour for a keyword category, if there is one
pub fn keyword_colour(category: &str) -> Option<&'static str> {
    let category = category.to_lowercase();
    KEYWORD_COLOURS
        .iter()
        .find(|(keyword, _)| *keyword == category)
        .map(|(_, colour)| *colour)
}

/// Hue (`0..360`) for a category name in a repeatable way (naive rolling
/// hash over the UTF-16 code units, `hash * 31 + unit` with 32 bit shifts)
pub fn category_hue(category: &str) -> u16 {
    let mut hash: i64 = 0;
    for unit in category.encode_utf16() {
        let shifted = i64::from((hash as i32) << 5);
        hash = i64::from(unit) + (shifted - hash);
    }
    (hash.abs() % 360) as u16
}
