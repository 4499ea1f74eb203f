//! NexTrip API response DTOs.
//!
//! These types map directly to the NexTrip v2 JSON responses. Only the
//! fields we read are listed; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// Element of `GET /routes`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteDto {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: i32,
    pub route_label: String,
}

/// Element of `GET /directions/{route_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectionDto {
    pub direction_id: i32,
    pub direction_name: String,
}

/// Element of `GET /stops/{route_id}/{direction_id}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StopDto {
    pub place_code: String,
    pub description: String,
}

/// Response from `GET /{route_id}/{direction_id}/{place_code}`.
///
/// Departures come wrapped in an object alongside stop metadata, unlike
/// the catalog endpoints which return bare arrays.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NexTripResult {
    #[serde(default)]
    pub departures: Vec<DepartureDto>,
}

/// A single upcoming departure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DepartureDto {
    /// "Due", "5 Min", or a 12-hour dial time like "1:30".
    pub departure_text: String,

    /// Short direction label, e.g. "NB".
    #[serde(default)]
    pub direction_text: Option<String>,
}
