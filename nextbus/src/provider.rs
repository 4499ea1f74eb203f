//! The data-fetch seam between the pipeline and the transit service.

use crate::domain::{Departure, Direction, DirectionEntry, PlaceCode, RouteEntry, RouteKey, StopEntry};
use crate::nextrip::NexTripError;

/// Trait for fetching transit collections.
///
/// This abstraction allows the pipeline to be tested with mock data. Each
/// method is one read-only collection endpoint; implementations return
/// rows in the service's order and must not reorder them.
///
/// The futures carry no `Send` bound; the pipeline awaits them in place and
/// never spawns them onto other threads.
#[allow(async_fn_in_trait)]
pub trait TransitProvider {
    /// All routes the service knows about.
    async fn routes(&self) -> Result<Vec<RouteEntry>, NexTripError>;

    /// Directions served by a route.
    async fn directions(&self, route: &RouteKey) -> Result<Vec<DirectionEntry>, NexTripError>;

    /// Stops served by a route in one direction.
    async fn stops(
        &self,
        route: &RouteKey,
        direction: Direction,
    ) -> Result<Vec<StopEntry>, NexTripError>;

    /// Upcoming departures from a stop, soonest first.
    async fn departures(
        &self,
        route: &RouteKey,
        direction: Direction,
        stop: &PlaceCode,
    ) -> Result<Vec<Departure>, NexTripError>;
}
