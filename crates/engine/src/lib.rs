// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Sigma calendar project*
//!
//! This crate turns the host's raw column data into calendar events and
//! answers the date range queries the calendar views make.  It is
//! responsible for:
//!
//! - Checking the configured columns are known to the host
//! - Building one event per usable row (dropping rows without a title or a
//!   start date)
//! - Sorting the events and collecting their categories and stats
//! - Finding the events for a day, or for a span of time
//!
//! Alongside that it offers the date arithmetic the views need (which days a
//! month/week/day/year view shows, and moving between periods), the host
//! variable updates for clicks, and random sample events.
//!
//! ## Usage
//!
//! ```ignore
//! let collection = process_calendar_data(Some(&data), &mapping, &settings, Some(&columns))?;
//! for day in visible_days(CalendarView::Month, today, settings.week_starts_on) {
//!     let events = events_for_day(collection.events(), day);
//! }
//! ```
//!

mod builder;
pub mod colour;
mod collection;
mod index;
mod interaction;
mod pipeline;
mod query;
mod sample;
pub mod view;

pub use colour::event_colour;
pub use collection::*;
pub use index::*;
pub use interaction::*;
pub use pipeline::*;
pub use query::*;
pub use sample::*;
pub use view::{Direction, initial_date, navigate, visible_days, visible_range};
