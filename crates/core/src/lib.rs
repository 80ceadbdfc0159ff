// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Sigma calendar project*
//!
//! This crate defines the basic datatypes used across the Sigma calendar
//! project: the host's column registry and raw column data, the field mapping
//! that ties columns to event fields, the user settings, and the calendar
//! [`Event`] itself.
//!
//! It also holds the value parsers used when turning raw cells into events
//! (date parsing and all-day inference) and the column lookups made against
//! the host's registry.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod colour;
mod column;
mod date;
mod event;
mod id;
mod mapping;
mod raw;
mod settings;
mod title;

pub use colour::*;
pub use column::*;
pub use date::*;
pub use event::*;
pub use id::*;
pub use mapping::*;
pub use raw::*;
pub use settings::*;
pub use title::*;
