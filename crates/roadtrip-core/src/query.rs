//! Query facade over a loaded country graph
//!
//! `distance` and `route` never fail: unknown names and unreachable pairs
//! come back as `None` and an empty route. The `try_` variants keep the
//! error kind for callers that report it.

use crate::error::Result;
use crate::graph::{
    find_route, shortest_distance, CountryGraph, Distance, DistanceReport, GraphIssue,
    NameResolver, Resolution, RouteReport,
};

/// Entry point for distance and route queries.
///
/// Owns the graph; every method takes `&self`, so a `RoadTrip` can be
/// shared across threads without locking.
#[derive(Debug, Clone)]
pub struct RoadTrip {
    graph: CountryGraph,
}

impl RoadTrip {
    pub fn new(graph: CountryGraph) -> Self {
        let issues = graph.validate();
        if !issues.is_empty() {
            tracing::warn!(count = issues.len(), "graph has structural issues");
            for issue in &issues {
                tracing::debug!(%issue, "graph_issue");
            }
        }
        Self { graph }
    }

    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(&self.graph)
    }

    /// Resolve a free-form country name to its node key
    pub fn resolve(&self, name: &str) -> Result<Resolution> {
        self.resolver().resolve(name)
    }

    /// Canonical country names in sorted order
    pub fn countries(&self) -> Vec<String> {
        self.graph.countries().map(str::to_string).collect()
    }

    pub fn issues(&self) -> Vec<GraphIssue> {
        self.graph.validate()
    }

    /// Shortest distance, or `None` for unknown names and unreachable pairs
    pub fn distance(&self, from: &str, to: &str) -> Option<Distance> {
        self.try_distance(from, to)
            .map(|report| report.distance_km)
            .ok()
    }

    /// Minimum-hop route as canonical names, empty for unknown names and
    /// unreachable pairs
    pub fn route(&self, from: &str, to: &str) -> Vec<String> {
        self.try_route(from, to)
            .map(|report| report.route)
            .unwrap_or_default()
    }

    #[tracing::instrument(skip(self))]
    pub fn try_distance(&self, from: &str, to: &str) -> Result<DistanceReport> {
        let from = self.resolve(from)?.key;
        let to = self.resolve(to)?.key;
        let distance_km = shortest_distance(&self.graph, &from, &to)?;

        Ok(DistanceReport {
            from,
            to,
            distance_km,
        })
    }

    /// Route lookup. An unreachable pair is not an error here: the report
    /// comes back with `found == false`.
    #[tracing::instrument(skip(self))]
    pub fn try_route(&self, from: &str, to: &str) -> Result<RouteReport> {
        let from = self.resolve(from)?.key;
        let to = self.resolve(to)?.key;
        let route = find_route(&self.graph, &from, &to);

        Ok(RouteReport {
            found: !route.is_empty(),
            hops: route.len().saturating_sub(1),
            from,
            to,
            route,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoadTripError;
    use crate::graph::fixtures::europe;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_distance_direct_border() {
        let trip = RoadTrip::new(europe());
        assert_eq!(trip.distance("France", "Spain"), Some(Distance::new(623)));
        assert_eq!(trip.route("France", "Spain"), vec!["France", "Spain"]);
    }

    #[test]
    fn test_isolated_country() {
        let trip = RoadTrip::new(europe());
        assert_eq!(trip.distance("Madagascar", "France"), None);
        assert!(trip.route("Madagascar", "France").is_empty());

        let err = trip.try_distance("Madagascar", "France").unwrap_err();
        assert!(matches!(err, RoadTripError::NoPathFound { .. }));

        let report = trip.try_route("Madagascar", "France").unwrap();
        assert!(!report.found);
        assert_eq!(report.hops, 0);
    }

    #[test]
    fn test_unknown_country_is_a_sentinel_not_a_panic() {
        let trip = RoadTrip::new(europe());
        assert_eq!(trip.distance("Wakanda", "France"), None);
        assert_eq!(trip.distance("France", "Wakanda"), None);
        assert!(trip.route("Wakanda", "France").is_empty());

        let err = trip.try_route("France", "Wakanda").unwrap_err();
        assert!(matches!(err, RoadTripError::UnknownCountry { input } if input == "Wakanda"));
    }

    #[test]
    fn test_names_are_resolved_before_querying() {
        let trip = RoadTrip::new(europe());

        // Substring and alias inputs come back as canonical names
        let report = trip.try_route("Portug", "SPN").unwrap();
        assert_eq!(report.from, "Portugal");
        assert_eq!(report.to, "Spain");
        assert_eq!(report.route, vec!["Portugal", "Spain"]);
        assert_eq!(report.hops, 1);

        let report = trip.try_distance("FRN", "Belg").unwrap();
        assert_eq!(report.from, "France");
        assert_eq!(report.to, "Belgium");
        assert_eq!(report.distance_km.km(), 262);
    }

    #[test]
    fn test_usa_resolves_to_united_states() {
        let mut builder = GraphBuilder::new();
        builder
            .add_border("United States", "Canada", 733)
            .alias("USA", "United States");
        let trip = RoadTrip::new(builder.build());

        assert_eq!(trip.resolve("USA").unwrap().key, "United States");
        assert_eq!(trip.distance("USA", "Canada"), Some(Distance::new(733)));
        assert_eq!(trip.route("USA", "Canada"), vec!["United States", "Canada"]);
    }

    #[test]
    fn test_countries_sorted() {
        let trip = RoadTrip::new(europe());
        let countries = trip.countries();
        assert_eq!(countries.first().map(String::as_str), Some("Austria"));
        assert_eq!(countries.len(), 10);
        assert!(trip.issues().is_empty());
    }

    #[test]
    fn test_facade_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoadTrip>();
    }
}
