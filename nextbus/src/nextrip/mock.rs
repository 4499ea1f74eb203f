//! Mock NexTrip client for testing without network access.
//!
//! Serves a small transit network loaded from a JSON fixture as if it were
//! the live API. The fixture mirrors the endpoint layout:
//!
//! ```json
//! {
//!   "routes": [{"route_id": "901", "agency_id": 0, "route_label": "METRO Blue Line"}],
//!   "directions": {"901": [{"direction_id": 0, "direction_name": "Northbound"}]},
//!   "stops": {"901/0": [{"place_code": "TF22", "description": "Target Field Station Platform 2"}]},
//!   "departures": {"901/0/TF22": [{"departure_text": "5 Min", "direction_text": "NB"}]}
//! }
//! ```
//!
//! Unknown keys yield empty lists, which is how the live service answers
//! a direction code it doesn't serve.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::Deserialize;

use crate::domain::{
    Departure, Direction, DirectionEntry, PlaceCode, RouteEntry, RouteKey, StopEntry,
};
use crate::provider::TransitProvider;

use super::convert::{convert_departures, convert_directions, convert_routes, convert_stops};
use super::error::NexTripError;
use super::types::{DepartureDto, DirectionDto, RouteDto, StopDto};

/// A collection endpoint, used to inject failures and record requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Routes,
    Directions,
    Stops,
    Departures,
}

/// Fixture contents, keyed the way request paths are built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MockNetwork {
    #[serde(default)]
    pub routes: Vec<RouteDto>,
    /// Keyed by route id.
    #[serde(default)]
    pub directions: HashMap<String, Vec<DirectionDto>>,
    /// Keyed by "route/direction".
    #[serde(default)]
    pub stops: HashMap<String, Vec<StopDto>>,
    /// Keyed by "route/direction/place".
    #[serde(default)]
    pub departures: HashMap<String, Vec<DepartureDto>>,
}

/// Mock NexTrip client that serves data from a fixture.
///
/// Clones share the request log, so a test can hand a clone to the code
/// under test and inspect the log afterwards.
#[derive(Clone)]
pub struct MockNexTripClient {
    network: Arc<MockNetwork>,
    failing: Vec<Endpoint>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<Endpoint>>>,
}

impl MockNexTripClient {
    pub fn new(network: MockNetwork) -> Self {
        Self {
            network: Arc::new(network),
            failing: Vec::new(),
            delay: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Build a mock client from fixture JSON text.
    pub fn from_json(json: &str) -> Result<Self, NexTripError> {
        let network: MockNetwork = serde_json::from_str(json)
            .map_err(|e| NexTripError::Fixture(format!("failed to parse fixture: {e}")))?;
        Ok(Self::new(network))
    }

    /// Build a mock client from a fixture file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NexTripError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| NexTripError::Fixture(format!("failed to read {path:?}: {e}")))?;
        Self::from_json(&json)
    }

    /// Make every request to `endpoint` fail with a 503.
    pub fn fail_on(mut self, endpoint: Endpoint) -> Self {
        self.failing.push(endpoint);
        self
    }

    /// Delay every response, to exercise deadlines.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Endpoints requested so far, in order.
    pub fn requests(&self) -> Vec<Endpoint> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    async fn request(&self, endpoint: Endpoint) -> Result<(), NexTripError> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(endpoint);
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.contains(&endpoint) {
            return Err(NexTripError::ApiError {
                status: 503,
                message: format!("mock failure for {endpoint:?}"),
            });
        }

        Ok(())
    }
}

impl TransitProvider for MockNexTripClient {
    async fn routes(&self) -> Result<Vec<RouteEntry>, NexTripError> {
        self.request(Endpoint::Routes).await?;
        Ok(convert_routes(&self.network.routes)?)
    }

    async fn directions(&self, route: &RouteKey) -> Result<Vec<DirectionEntry>, NexTripError> {
        self.request(Endpoint::Directions).await?;
        let dtos = self
            .network
            .directions
            .get(route.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(convert_directions(dtos))
    }

    async fn stops(
        &self,
        route: &RouteKey,
        direction: Direction,
    ) -> Result<Vec<StopEntry>, NexTripError> {
        self.request(Endpoint::Stops).await?;
        let key = format!("{}/{}", route.as_str(), direction.code());
        let dtos = self
            .network
            .stops
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(convert_stops(dtos)?)
    }

    async fn departures(
        &self,
        route: &RouteKey,
        direction: Direction,
        stop: &PlaceCode,
    ) -> Result<Vec<Departure>, NexTripError> {
        self.request(Endpoint::Departures).await?;
        let key = format!("{}/{}/{}", route.as_str(), direction.code(), stop.as_str());
        let dtos = self
            .network
            .departures
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(convert_departures(dtos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FIXTURE: &str = r#"{
        "routes": [
            {"route_id": "901", "agency_id": 0, "route_label": "METRO Blue Line"}
        ],
        "directions": {
            "901": [
                {"direction_id": 0, "direction_name": "Northbound"},
                {"direction_id": 1, "direction_name": "Southbound"}
            ]
        },
        "stops": {
            "901/1": [{"place_code": "TF22", "description": "Target Field Station Platform 2"}]
        },
        "departures": {
            "901/1/TF22": [{"departure_text": "5 Min", "direction_text": "SB"}]
        }
    }"#;

    fn route(s: &str) -> RouteKey {
        RouteKey::parse(s).unwrap()
    }

    #[tokio::test]
    async fn serves_fixture() {
        let client = MockNexTripClient::from_json(FIXTURE).unwrap();

        let routes = client.routes().await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].label, "METRO Blue Line");

        let directions = client.directions(&route("901")).await.unwrap();
        assert_eq!(directions.len(), 2);

        let stops = client.stops(&route("901"), Direction::South).await.unwrap();
        assert_eq!(stops[0].place_code.as_str(), "TF22");

        let departures = client
            .departures(&route("901"), Direction::South, &stops[0].place_code)
            .await
            .unwrap();
        assert_eq!(departures, vec![Departure::new("5 Min", "SB")]);
    }

    #[tokio::test]
    async fn unknown_keys_are_empty() {
        let client = MockNexTripClient::from_json(FIXTURE).unwrap();

        assert!(client.directions(&route("2")).await.unwrap().is_empty());
        assert!(
            client
                .stops(&route("901"), Direction::North)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn injected_failure() {
        let client = MockNexTripClient::from_json(FIXTURE)
            .unwrap()
            .fail_on(Endpoint::Stops);

        assert!(client.routes().await.is_ok());
        let err = client
            .stops(&route("901"), Direction::South)
            .await
            .unwrap_err();
        assert!(matches!(err, NexTripError::ApiError { status: 503, .. }));
    }

    #[tokio::test]
    async fn records_requests_across_clones() {
        let client = MockNexTripClient::from_json(FIXTURE).unwrap();
        let clone = client.clone();

        clone.routes().await.unwrap();
        clone.directions(&route("901")).await.unwrap();

        assert_eq!(
            client.requests(),
            vec![Endpoint::Routes, Endpoint::Directions]
        );
    }

    #[tokio::test]
    async fn empty_route_id_fails_the_catalog() {
        let client = MockNexTripClient::from_json(
            r#"{"routes": [{"route_id": "", "route_label": "Nameless"}]}"#,
        )
        .unwrap();

        let err = client.routes().await.unwrap_err();
        assert!(matches!(err, NexTripError::Conversion(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let client = MockNexTripClient::from_file(file.path());
        assert!(client.is_ok());
    }

    #[test]
    fn missing_file_is_fixture_error() {
        let result = MockNexTripClient::from_file("/nonexistent/network.json");
        assert!(matches!(result, Err(NexTripError::Fixture(_))));
    }

    #[test]
    fn malformed_fixture_is_fixture_error() {
        let result = MockNexTripClient::from_json("{ not json");
        assert!(matches!(result, Err(NexTripError::Fixture(_))));
    }

    #[test]
    fn bundled_fixture_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/mock_network.json");
        assert!(MockNexTripClient::from_file(path).is_ok());
    }
}
