//! Domain types for the next-bus lookup.
//!
//! These are validated forms of the records the NexTrip service returns.
//! Keys that end up in request paths enforce their invariants at
//! construction time, so code that receives them can interpolate them
//! without further checks.

mod departure;
mod direction;
mod route;
mod stop;
mod time;

pub use departure::{Departure, DepartureForm};
pub use direction::{Direction, DirectionEntry};
pub use route::{InvalidRouteKey, RouteEntry, RouteKey};
pub use stop::{InvalidPlaceCode, PlaceCode, StopEntry};
pub use time::{ClockParseError, DialTime, WallClock};
