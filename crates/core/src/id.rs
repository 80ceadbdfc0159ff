// SPDX-License-Identifier: MIT

//!
//! Event identity
//!

use serde::Serialize;

/// Identifies an event.  Taken from the configured ID column when there is
/// one, otherwise it is the event's source row index.
///
/// Row-index IDs change whenever the host reorders its rows, so anything that
/// needs identity across refreshes should configure an ID column.
#[rustfmt::skip]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize)]
#[serde(untagged)]
pub enum EventId {
    /// The (stringified) value of the ID column
    #[display("{_0}")]
    Column(String),

    /// The zero-based source row
    #[display("{_0}")]
    Row(usize),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn serialisation() {
        let id = EventId::Column(String::from("evt-1"));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""evt-1""#);
        assert_eq!(id.to_string(), "evt-1");

        let id = EventId::Row(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        assert_eq!(id.to_string(), "7");
    }
}
