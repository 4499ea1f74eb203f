//! NexTrip (Metro Transit real-time departures) client.
//!
//! This module provides an HTTP client for the NexTrip v2 API and a mock
//! client that serves a fixture instead.
//!
//! Key characteristics of NexTrip:
//! - Catalog endpoints return bare JSON arrays; the departures endpoint
//!   wraps them in an object
//! - Directions are small integers per route, and an unserved code simply
//!   returns an empty stop list
//! - Departure times are either "Due", "N Min", or a 12-hour "H:MM" with
//!   no AM/PM marker

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, NexTripClient, NexTripConfig};
pub use convert::ConversionError;
pub use error::NexTripError;
pub use mock::{Endpoint, MockNetwork, MockNexTripClient};
pub use types::{DepartureDto, DirectionDto, NexTripResult, RouteDto, StopDto};
