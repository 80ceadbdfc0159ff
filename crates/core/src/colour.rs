// SPDX-License-Identifier: MIT

//!
//! The colour assigned to an event
//!

use serde::{Deserialize, Serialize};

/// A CSS colour value, e.g. `#3788d8` or `hsl(120, 65%, 55%)`.  Values set by
/// users are passed through untouched.
#[derive(derive_more::Display, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EventColour(String);

impl EventColour {
    pub fn new<S: Into<String>>(colour: S) -> Self {
        Self(colour.into())
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventColour {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
