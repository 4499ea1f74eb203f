//! NexTrip HTTP client.
//!
//! Provides async methods for the four NexTrip collection endpoints and
//! converts their responses to domain types.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{
    Departure, Direction, DirectionEntry, PlaceCode, RouteEntry, RouteKey, StopEntry,
};
use crate::provider::TransitProvider;

use super::convert::{convert_departures, convert_directions, convert_routes, convert_stops};
use super::error::NexTripError;
use super::types::{DirectionDto, NexTripResult, RouteDto, StopDto};

/// Default base URL for the Metro Transit NexTrip v2 API.
pub const DEFAULT_BASE_URL: &str = "https://svc.metrotransit.org/nextripv2";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest slice of a bad response body kept in an error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the NexTrip client.
#[derive(Debug, Clone)]
pub struct NexTripConfig {
    /// Base URL for the API (defaults to production NexTrip)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NexTripConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NexTripConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// NexTrip API client.
#[derive(Debug, Clone)]
pub struct NexTripClient {
    http: reqwest::Client,
    base_url: String,
}

impl NexTripClient {
    /// Create a new NexTrip client with the given configuration.
    pub fn new(config: NexTripConfig) -> Result<Self, NexTripError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// GET a path and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, NexTripError> {
        let url = self.url(path);
        debug!(%url, "fetching");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NexTripError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NexTripError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| NexTripError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
        })
    }
}

impl TransitProvider for NexTripClient {
    async fn routes(&self) -> Result<Vec<RouteEntry>, NexTripError> {
        let dtos: Vec<RouteDto> = self.get_json("routes").await?;
        Ok(convert_routes(&dtos)?)
    }

    async fn directions(&self, route: &RouteKey) -> Result<Vec<DirectionEntry>, NexTripError> {
        let dtos: Vec<DirectionDto> = self.get_json(&directions_path(route)).await?;
        Ok(convert_directions(&dtos))
    }

    async fn stops(
        &self,
        route: &RouteKey,
        direction: Direction,
    ) -> Result<Vec<StopEntry>, NexTripError> {
        let dtos: Vec<StopDto> = self.get_json(&stops_path(route, direction)).await?;
        Ok(convert_stops(&dtos)?)
    }

    async fn departures(
        &self,
        route: &RouteKey,
        direction: Direction,
        stop: &PlaceCode,
    ) -> Result<Vec<Departure>, NexTripError> {
        let result: NexTripResult = self
            .get_json(&departures_path(route, direction, stop))
            .await?;
        Ok(convert_departures(&result.departures))
    }
}

// Keys are service data and may contain spaces or '/', so each one is
// percent-encoded as a single path segment.

fn directions_path(route: &RouteKey) -> String {
    format!("directions/{}", urlencoding::encode(route.as_str()))
}

fn stops_path(route: &RouteKey, direction: Direction) -> String {
    format!(
        "stops/{}/{}",
        urlencoding::encode(route.as_str()),
        direction.code()
    )
}

fn departures_path(route: &RouteKey, direction: Direction, stop: &PlaceCode) -> String {
    format!(
        "{}/{}/{}",
        urlencoding::encode(route.as_str()),
        direction.code(),
        urlencoding::encode(stop.as_str())
    )
}
