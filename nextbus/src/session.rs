//! The route → direction → stop → departure → estimate pipeline.
//!
//! A [`Session`] owns the transit provider and the route catalog fetched
//! at startup. Each rider query runs as one cycle: stages run strictly in
//! order, each consuming the key the previous one resolved, and the whole
//! cycle is bounded by a deadline.

use std::time::Duration;

use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::config::SessionConfig;
use crate::domain::{ClockParseError, Departure, Direction, RouteEntry, StopEntry, WallClock};
use crate::estimate::{ArrivalEstimate, estimate};
use crate::nextrip::NexTripError;
use crate::provider::TransitProvider;
use crate::resolve::{check_direction, resolve_direction, resolve_stop};

/// Error from one pipeline cycle.
#[derive(Debug, thiserror::Error)]
pub enum CycleError {
    /// No route has this key or label
    #[error("no matching route found for the input {query:?}")]
    RouteNotFound { query: String },

    /// No stop description contains this text
    #[error("no stop matching {query:?} on route {route} {direction}")]
    StopNotFound {
        query: String,
        route: String,
        direction: Direction,
    },

    /// A collection fetch failed
    #[error("failed to fetch from NexTrip: {0}")]
    Fetch(#[from] NexTripError),

    /// The departure time could not be read
    #[error(transparent)]
    Parse(#[from] ClockParseError),

    /// The cycle did not finish in time
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

impl CycleError {
    /// Route and stop misses end the interactive loop; other errors only
    /// end the current cycle.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CycleError::RouteNotFound { .. } | CycleError::StopNotFound { .. }
        )
    }
}

/// The rider's three answers for one cycle, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRequest {
    pub route_query: String,
    pub direction_text: String,
    pub stop_query: String,
}

impl CycleRequest {
    pub fn new(
        route_query: impl Into<String>,
        direction_text: impl Into<String>,
        stop_query: impl Into<String>,
    ) -> Self {
        Self {
            route_query: route_query.into(),
            direction_text: direction_text.into(),
            stop_query: stop_query.into(),
        }
    }
}

/// The next departure and what it means for the rider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextBus {
    pub departure: Departure,
    pub estimate: ArrivalEstimate,
}

/// Everything one successful cycle resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub route: RouteEntry,
    pub direction: Direction,
    pub stop: StopEntry,
    /// `None` when the stop has no upcoming departures.
    pub next: Option<NextBus>,
}

/// Request-scoped context for the pipeline.
pub struct Session<P> {
    provider: P,
    catalog: RouteCatalog,
    config: SessionConfig,
}

impl<P: TransitProvider> Session<P> {
    /// Fetch the route catalog and start a session.
    pub async fn start(provider: P, config: SessionConfig) -> Result<Self, NexTripError> {
        let catalog = RouteCatalog::fetch(&provider).await?;
        Ok(Self::new(provider, catalog, config))
    }

    pub fn new(provider: P, catalog: RouteCatalog, config: SessionConfig) -> Self {
        Self {
            provider,
            catalog,
            config,
        }
    }

    pub fn catalog(&self) -> &RouteCatalog {
        &self.catalog
    }

    /// Run one cycle against wall-clock time `now`.
    pub async fn run_cycle(
        &self,
        request: &CycleRequest,
        now: WallClock,
    ) -> Result<CycleReport, CycleError> {
        let deadline = self.config.cycle_timeout;
        tokio::time::timeout(deadline, self.run_stages(request, now))
            .await
            .map_err(|_| CycleError::Timeout(deadline))?
    }

    async fn run_stages(
        &self,
        request: &CycleRequest,
        now: WallClock,
    ) -> Result<CycleReport, CycleError> {
        let route = self
            .catalog
            .resolve(&request.route_query)
            .cloned()
            .ok_or_else(|| CycleError::RouteNotFound {
                query: request.route_query.clone(),
            })?;
        debug!(key = %route.key, label = %route.label, "resolved route");

        let direction = resolve_direction(&request.direction_text);
        // Diagnostic only: the catalog never changes the chosen code.
        let directions = self.provider.directions(&route.key).await?;
        check_direction(direction, &directions);

        let stop = resolve_stop(&self.provider, &route.key, direction, &request.stop_query)
            .await?
            .ok_or_else(|| CycleError::StopNotFound {
                query: request.stop_query.clone(),
                route: route.key.to_string(),
                direction,
            })?;
        debug!(place_code = %stop.place_code, description = %stop.description, "resolved stop");

        let departures = self
            .provider
            .departures(&route.key, direction, &stop.place_code)
            .await?;

        let next = match departures.into_iter().next() {
            Some(departure) => {
                let estimate = estimate(&departure.departure_text, now)?;
                debug!(text = %departure.departure_text, %now, ?estimate, "estimated arrival");
                Some(NextBus {
                    departure,
                    estimate,
                })
            }
            None => None,
        };

        Ok(CycleReport {
            route,
            direction,
            stop,
            next,
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
