//! Country name resolution
//!
//! Matching policy, first hit wins:
//! 1. exact node key
//! 2. input is a substring of a node key, first key in sorted order
//! 3. a node key is a substring of the input, longest key first
//! 4. exact alias code, translated to its display name and then matched
//!    against node keys with rules 1-3
//!
//! Rule 2 runs before rule 3, so `Dominican` finds `Dominican Republic`
//! rather than `Dominica` and `New Guinea` finds `Papua New Guinea` rather
//! than `Guinea`. Under rule 3 `Republic of Guinea-Bissau` finds
//! `Guinea-Bissau` rather than `Guinea`; equal lengths keep sorted order.
//!
//! Matching is case-sensitive. There is no edit-distance matching.

use crate::error::{Result, RoadTripError};
use crate::graph::store::CountryGraph;
use crate::graph::types::{MatchKind, Resolution};

/// Maps free-form input to canonical node keys of a graph
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'g> {
    graph: &'g CountryGraph,
}

impl<'g> NameResolver<'g> {
    pub fn new(graph: &'g CountryGraph) -> Self {
        Self { graph }
    }

    /// Resolve `input` to a node key, or fail with `UnknownCountry`.
    ///
    /// Surrounding whitespace is ignored; blank input never matches.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, input: &str) -> Result<Resolution> {
        let needle = input.trim();
        if needle.is_empty() {
            return Err(RoadTripError::unknown_country(input));
        }

        if let Some(resolution) = self.match_node(needle) {
            return Ok(resolution);
        }

        if let Some(decoded) = self.graph.aliases().decode(needle) {
            if let Some(found) = self.match_node(decoded) {
                return Ok(Resolution {
                    key: found.key,
                    matched_by: MatchKind::Alias,
                });
            }
            tracing::debug!(code = needle, decoded, "alias does not name a graph node");
        }

        Err(RoadTripError::unknown_country(input))
    }

    /// Whether `input` resolves to a node
    pub fn is_valid(&self, input: &str) -> bool {
        self.resolve(input).is_ok()
    }

    fn match_node(&self, needle: &str) -> Option<Resolution> {
        if self.graph.contains(needle) {
            return Some(Resolution {
                key: needle.to_string(),
                matched_by: MatchKind::Exact,
            });
        }

        let within_key = self.graph.countries().find(|key| key.contains(needle));
        let within_input = || {
            self.graph
                .countries()
                .filter(|key| needle.contains(key))
                .fold(None, |best: Option<&str>, key| match best {
                    Some(best) if best.len() >= key.len() => Some(best),
                    _ => Some(key),
                })
        };

        within_key.or_else(within_input).map(|key| Resolution {
            key: key.to_string(),
            matched_by: MatchKind::Substring,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::store::GraphBuilder;

    fn graph() -> CountryGraph {
        let mut builder = GraphBuilder::new();
        builder
            .add_border("France", "Spain", 623)
            .add_border("United States", "Canada", 733)
            .add_country("Madagascar")
            .alias("FRN", "France")
            .alias("USA", "United States")
            .alias("GDR", "German Democratic Republic");
        builder.build()
    }

    #[test]
    fn test_exact_match() {
        let graph = graph();
        let resolution = NameResolver::new(&graph).resolve("France").unwrap();
        assert_eq!(resolution.key, "France");
        assert_eq!(resolution.matched_by, MatchKind::Exact);
    }

    #[test]
    fn test_input_is_substring_of_key() {
        let graph = graph();
        let resolution = NameResolver::new(&graph).resolve("United").unwrap();
        assert_eq!(resolution.key, "United States");
        assert_eq!(resolution.matched_by, MatchKind::Substring);
    }

    #[test]
    fn test_key_is_substring_of_input() {
        let graph = graph();
        let resolution = NameResolver::new(&graph)
            .resolve("Republic of France")
            .unwrap();
        assert_eq!(resolution.key, "France");
        assert_eq!(resolution.matched_by, MatchKind::Substring);
    }

    fn lookalikes() -> CountryGraph {
        let mut builder = GraphBuilder::new();
        builder
            .add_border("Dominican Republic", "Haiti", 376)
            .add_country("Dominica")
            .add_border("Guinea", "Guinea-Bissau", 421)
            .add_border("Papua New Guinea", "Indonesia", 824);
        builder.build()
    }

    #[test]
    fn test_key_containing_input_beats_key_inside_input() {
        let graph = lookalikes();
        let resolver = NameResolver::new(&graph);

        let resolution = resolver.resolve("Dominican").unwrap();
        assert_eq!(resolution.key, "Dominican Republic");
        assert_eq!(resolution.matched_by, MatchKind::Substring);

        assert_eq!(resolver.resolve("New Guinea").unwrap().key, "Papua New Guinea");
        assert_eq!(resolver.resolve("Dominica").unwrap().key, "Dominica");
    }

    #[test]
    fn test_longest_key_inside_input_wins() {
        let graph = lookalikes();
        let resolver = NameResolver::new(&graph);

        assert_eq!(
            resolver.resolve("Republic of Guinea-Bissau").unwrap().key,
            "Guinea-Bissau"
        );
        assert_eq!(resolver.resolve("Guinea Conakry").unwrap().key, "Guinea");
    }

    #[test]
    fn test_alias_code_translates_to_node_key() {
        let graph = graph();
        let resolution = NameResolver::new(&graph).resolve("USA").unwrap();
        assert_eq!(resolution.key, "United States");
        assert_eq!(resolution.matched_by, MatchKind::Alias);
    }

    #[test]
    fn test_alias_without_graph_node_is_unknown() {
        let graph = graph();
        let err = NameResolver::new(&graph).resolve("GDR").unwrap_err();
        assert!(matches!(err, RoadTripError::UnknownCountry { .. }));
    }

    #[test]
    fn test_unknown_country() {
        let graph = graph();
        let resolver = NameResolver::new(&graph);
        let err = resolver.resolve("Wakanda").unwrap_err();
        assert_eq!(err.to_string(), "unknown country: Wakanda");
        assert!(!resolver.is_valid("Wakanda"));
    }

    #[test]
    fn test_blank_input_never_matches() {
        let graph = graph();
        let resolver = NameResolver::new(&graph);
        assert!(!resolver.is_valid(""));
        assert!(!resolver.is_valid("   "));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let graph = graph();
        let resolution = NameResolver::new(&graph).resolve("  Spain ").unwrap();
        assert_eq!(resolution.key, "Spain");
        assert_eq!(resolution.matched_by, MatchKind::Exact);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let graph = graph();
        assert!(!NameResolver::new(&graph).is_valid("france"));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let graph = graph();
        let resolver = NameResolver::new(&graph);
        for country in graph.countries() {
            let once = resolver.resolve(country).unwrap();
            let twice = resolver.resolve(&once.key).unwrap();
            assert_eq!(once.key, country);
            assert_eq!(twice.key, country);
        }
    }
}
