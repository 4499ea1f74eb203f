//! Conversion from NexTrip DTOs to domain types.
//!
//! Catalog lists are converted whole. A row with an empty id fails the
//! entire list, since dropping it would shift which stop a query matches
//! first.

use crate::domain::{Departure, DirectionEntry, PlaceCode, RouteEntry, RouteKey, StopEntry};

use super::types::{DepartureDto, DirectionDto, RouteDto, StopDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid route id: {0:?}")]
    InvalidRouteKey(String),

    #[error("invalid place code: {0:?}")]
    InvalidPlaceCode(String),
}

pub fn convert_route(dto: &RouteDto) -> Result<RouteEntry, ConversionError> {
    let key = RouteKey::parse(&dto.route_id)
        .map_err(|_| ConversionError::InvalidRouteKey(dto.route_id.clone()))?;
    Ok(RouteEntry::new(key, dto.agency_id, dto.route_label.clone()))
}

pub fn convert_stop(dto: &StopDto) -> Result<StopEntry, ConversionError> {
    let place_code = PlaceCode::parse(&dto.place_code)
        .map_err(|_| ConversionError::InvalidPlaceCode(dto.place_code.clone()))?;
    Ok(StopEntry::new(place_code, dto.description.clone()))
}

/// Convert the route list, keeping catalog order.
pub fn convert_routes(dtos: &[RouteDto]) -> Result<Vec<RouteEntry>, ConversionError> {
    dtos.iter().map(convert_route).collect()
}

/// Convert the stop list, keeping service order (stop matching is
/// first-match, so order is significant).
pub fn convert_stops(dtos: &[StopDto]) -> Result<Vec<StopEntry>, ConversionError> {
    dtos.iter().map(convert_stop).collect()
}

pub fn convert_directions(dtos: &[DirectionDto]) -> Vec<DirectionEntry> {
    dtos.iter()
        .map(|dto| DirectionEntry::new(dto.direction_id, dto.direction_name.clone()))
        .collect()
}

pub fn convert_departures(dtos: &[DepartureDto]) -> Vec<Departure> {
    dtos.iter()
        .map(|dto| {
            Departure::new(
                dto.departure_text.clone(),
                dto.direction_text.clone().unwrap_or_default(),
            )
        })
        .collect()
}
