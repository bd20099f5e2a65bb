//! Structural checks over a loaded graph.
//!
//! Queries tolerate every issue reported here; validation only surfaces
//! them so a loader or the CLI can warn about inconsistent input.

use serde::Serialize;

use crate::graph::store::CountryGraph;

/// A structural inconsistency in the adjacency map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphIssue {
    /// A neighbor entry refers to a country with no top-level entry
    DanglingNeighbor { country: String, neighbor: String },
    /// `country -> neighbor` exists but the mirror edge does not
    MissingMirror { country: String, neighbor: String },
    /// Both directions exist with different weights
    WeightMismatch {
        country: String,
        neighbor: String,
        forward_km: u32,
        backward_km: u32,
    },
}

impl std::fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphIssue::DanglingNeighbor { country, neighbor } => {
                write!(f, "{} borders unknown country {}", country, neighbor)
            }
            GraphIssue::MissingMirror { country, neighbor } => {
                write!(f, "{} -> {} has no mirror edge", country, neighbor)
            }
            GraphIssue::WeightMismatch {
                country,
                neighbor,
                forward_km,
                backward_km,
            } => write!(
                f,
                "{} -> {} is {} km but {} -> {} is {} km",
                country, neighbor, forward_km, neighbor, country, backward_km
            ),
        }
    }
}

impl CountryGraph {
    /// List structural issues, sorted by country then neighbor.
    ///
    /// An empty result means every neighbor is a node and every edge is
    /// mirrored with the same weight.
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();

        for (country, neighbors) in self.adjacency() {
            for (neighbor, &forward_km) in neighbors {
                let Some(back) = self.neighbors(neighbor) else {
                    issues.push(GraphIssue::DanglingNeighbor {
                        country: country.clone(),
                        neighbor: neighbor.clone(),
                    });
                    continue;
                };

                match back.get(country) {
                    None => issues.push(GraphIssue::MissingMirror {
                        country: country.clone(),
                        neighbor: neighbor.clone(),
                    }),
                    // Report each mismatched pair once
                    Some(&backward_km) if backward_km != forward_km && country < neighbor => {
                        issues.push(GraphIssue::WeightMismatch {
                            country: country.clone(),
                            neighbor: neighbor.clone(),
                            forward_km,
                            backward_km,
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        issues
    }
}
