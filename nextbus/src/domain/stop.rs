//! Stop (place) codes and catalog entries.

use std::fmt;

/// Error returned when parsing an invalid place code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid place code: {reason}")]
pub struct InvalidPlaceCode {
    reason: &'static str,
}

/// A service-assigned stop identifier, scoped to a route and direction
/// (e.g. "TF22" for Target Field Station Platform 2).
///
/// Like [`RouteKey`](super::RouteKey), any non-empty text is accepted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PlaceCode(String);

impl PlaceCode {
    pub fn parse(s: &str) -> Result<Self, InvalidPlaceCode> {
        if s.is_empty() {
            return Err(InvalidPlaceCode {
                reason: "must not be empty",
            });
        }

        Ok(PlaceCode(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaceCode({})", self.0)
    }
}

impl fmt::Display for PlaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop served by a route in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopEntry {
    pub place_code: PlaceCode,
    pub description: String,
}

impl StopEntry {
    pub fn new(place_code: PlaceCode, description: impl Into<String>) -> Self {
        Self {
            place_code,
            description: description.into(),
        }
    }

    /// True if the description contains `query` (case-sensitive).
    pub fn matches(&self, query: &str) -> bool {
        self.description.contains(query)
    }
}
