//! Resolving free-text rider input into service keys.
//!
//! Each resolver fails closed: if nothing matches, it says so rather than
//! picking a near miss. The one exception is direction, which always
//! yields a code (see [`resolve_direction`]).

use tracing::{debug, warn};

use crate::domain::{Direction, DirectionEntry, RouteEntry, RouteKey, StopEntry};
use crate::nextrip::NexTripError;
use crate::provider::TransitProvider;

/// Find the route whose key or label equals `query` exactly.
///
/// Matching is case-sensitive; callers trim input before calling. The
/// first match in catalog order wins.
pub fn resolve_route<'a>(routes: &'a [RouteEntry], query: &str) -> Option<&'a RouteEntry> {
    routes.iter().find(|route| route.matches(query))
}

/// Map rider direction text to a direction code.
///
/// "north" and "south" are recognised; anything else, including empty
/// input, falls back to north (code 0) with a warning. This never fails:
/// the service answers an unserved code with an empty stop list, so the
/// stop step reports the problem instead.
pub fn resolve_direction(text: &str) -> Direction {
    Direction::from_name(text).unwrap_or_else(|| {
        warn!(input = text, "unknown direction, defaulting to code 0");
        Direction::default()
    })
}

/// Compare a chosen direction against the route's direction catalog.
///
/// Only logs; the chosen code is used regardless of the outcome.
pub fn check_direction(direction: Direction, catalog: &[DirectionEntry]) -> bool {
    let listed = catalog
        .iter()
        .any(|entry| entry.code == i32::from(direction.code()));

    if !listed {
        warn!(
            code = direction.code(),
            catalog = ?catalog.iter().map(|e| e.code).collect::<Vec<_>>(),
            "direction code not listed for route"
        );
    }

    listed
}

/// Find the first stop whose description contains `query`.
///
/// Stops are scanned in the order given. If several stops match, which
/// one wins depends on the service's ordering.
pub fn find_stop<'a>(stops: &'a [StopEntry], query: &str) -> Option<&'a StopEntry> {
    stops.iter().find(|stop| stop.matches(query))
}

/// Fetch the stops for a route and direction, then match `query` against them.
///
/// Returns `Ok(None)` when no stop matches.
pub async fn resolve_stop<P: TransitProvider>(
    provider: &P,
    route: &RouteKey,
    direction: Direction,
    query: &str,
) -> Result<Option<StopEntry>, NexTripError> {
    let stops = provider.stops(route, direction).await?;
    debug!(%route, %direction, count = stops.len(), "fetched stops");
    Ok(find_stop(&stops, query).cloned())
}
