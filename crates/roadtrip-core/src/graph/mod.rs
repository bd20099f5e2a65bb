//! Country graph and query algorithms
//!
//! - `store`: immutable adjacency map plus the alias table
//! - `resolve`: free-form name to node key resolution
//! - `dijkstra`: weighted shortest distance
//! - `bfs`: minimum-hop route discovery
//! - `validate`: structural consistency report

pub mod bfs;
pub mod dijkstra;
pub mod resolve;
pub mod store;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bfs::find_route;
pub use dijkstra::shortest_distance;
pub use resolve::NameResolver;
pub use store::{AliasTable, CountryGraph, GraphBuilder, Neighbors};
pub use types::{Distance, DistanceReport, MatchKind, Resolution, RouteReport};
pub use validate::GraphIssue;
