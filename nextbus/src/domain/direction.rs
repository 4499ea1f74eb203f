//! Travel direction codes.

use std::fmt;

/// Direction of travel along a route.
///
/// NexTrip indexes directions as small integers per route. We model the
/// two-valued set the rider can choose from; anything else the service
/// reports is kept as a raw [`DirectionEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    North,
    South,
}

impl Direction {
    /// The integer code the service uses in request paths.
    pub fn code(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::South => 1,
        }
    }

    /// Look up a direction by its rider-facing name.
    ///
    /// Only the exact lowercase names are recognised.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "north" => Some(Direction::North),
            "south" => Some(Direction::South),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A direction as listed in the service's direction catalog for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionEntry {
    pub code: i32,
    /// e.g. "Northbound".
    pub name: String,
}

impl DirectionEntry {
    pub fn new(code: i32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}
