//! Route identifiers and catalog entries.

use std::fmt;

/// Error returned when parsing an invalid route key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route key: {reason}")]
pub struct InvalidRouteKey {
    reason: &'static str,
}

/// A service-assigned route identifier (e.g. "901" for the METRO Blue Line).
///
/// Route keys are opaque: any non-empty text the service hands out is
/// accepted verbatim, and the client percent-encodes it when building a
/// request path.
///
/// # Examples
///
/// ```
/// use nextbus::domain::RouteKey;
///
/// let key = RouteKey::parse("901").unwrap();
/// assert_eq!(key.as_str(), "901");
///
/// assert!(RouteKey::parse("").is_err());
/// assert_eq!(RouteKey::parse("A Line").unwrap().as_str(), "A Line");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteKey(String);

impl RouteKey {
    /// Parse a route key from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteKey> {
        if s.is_empty() {
            return Err(InvalidRouteKey {
                reason: "must not be empty",
            });
        }

        Ok(RouteKey(s.to_string()))
    }

    /// Returns the route key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteKey({})", self.0)
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the route catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub key: RouteKey,
    pub agency_id: i32,
    /// Human-readable name, e.g. "METRO Blue Line".
    pub label: String,
}

impl RouteEntry {
    pub fn new(key: RouteKey, agency_id: i32, label: impl Into<String>) -> Self {
        Self {
            key,
            agency_id,
            label: label.into(),
        }
    }

    /// True if `query` is exactly this route's key or label.
    ///
    /// Matching is case-sensitive and does no trimming of its own.
    pub fn matches(&self, query: &str) -> bool {
        self.key.as_str() == query || self.label == query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_keys() {
        assert!(RouteKey::parse("901").is_ok());
        assert!(RouteKey::parse("2").is_ok());
        assert!(RouteKey::parse("METRO-A").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(RouteKey::parse("").is_err());
    }

    #[test]
    fn keys_are_kept_verbatim() {
        assert_eq!(RouteKey::parse("A Line").unwrap().as_str(), "A Line");
        assert_eq!(RouteKey::parse("9/01").unwrap().as_str(), "9/01");
        assert_eq!(RouteKey::parse(" 901").unwrap().as_str(), " 901");
    }

    #[test]
    fn display_and_debug() {
        let key = RouteKey::parse("901").unwrap();
        assert_eq!(key.to_string(), "901");
        assert_eq!(format!("{key:?}"), "RouteKey(901)");
    }

    #[test]
    fn entry_matches_key_or_label() {
        let entry = RouteEntry::new(RouteKey::parse("901").unwrap(), 0, "METRO Blue Line");
        assert!(entry.matches("901"));
        assert!(entry.matches("METRO Blue Line"));
        assert!(!entry.matches("metro blue line"));
        assert!(!entry.matches("90"));
        assert!(!entry.matches(" 901"));
    }
}
