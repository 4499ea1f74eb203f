//! The route catalog.
//!
//! Fetched once at startup and held for the life of the process; every
//! cycle resolves its route query against the same list.

use crate::domain::RouteEntry;
use crate::nextrip::NexTripError;
use crate::provider::TransitProvider;
use crate::resolve::resolve_route;

/// Immutable list of routes, in service order.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<RouteEntry>,
}

impl RouteCatalog {
    /// Fetch the catalog from the service.
    ///
    /// This will fail if the service is unreachable.
    pub async fn fetch<P: TransitProvider>(provider: &P) -> Result<Self, NexTripError> {
        let routes = provider.routes().await?;
        Ok(Self { routes })
    }

    /// Look up a route by exact key or label.
    pub fn resolve(&self, query: &str) -> Option<&RouteEntry> {
        resolve_route(&self.routes, query)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nextrip::{Endpoint, MockNexTripClient};

    const ROUTES: &str = r#"{
        "routes": [
            {"route_id": "901", "agency_id": 0, "route_label": "METRO Blue Line"},
            {"route_id": "2", "agency_id": 0, "route_label": "Franklin Av"}
        ]
    }"#;

    #[tokio::test]
    async fn fetch_and_resolve() {
        let client = MockNexTripClient::from_json(ROUTES).unwrap();
        let catalog = RouteCatalog::fetch(&client).await.unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("METRO Blue Line").unwrap().key.as_str(), "901");
        assert_eq!(catalog.resolve("2").unwrap().label, "Franklin Av");
        assert!(catalog.resolve("3").is_none());
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let client = MockNexTripClient::from_json(ROUTES)
            .unwrap()
            .fail_on(Endpoint::Routes);

        assert!(RouteCatalog::fetch(&client).await.is_err());
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let catalog = RouteCatalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.resolve("901").is_none());
    }
}
