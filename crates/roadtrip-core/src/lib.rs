//! Roadtrip Core Library
//!
//! Country graph, name resolution, shortest-distance and route queries,
//! plus loading of the border, capital distance and state name files.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod load;
pub mod logging;
pub mod query;

pub use error::{Result, RoadTripError};
pub use graph::{CountryGraph, Distance, GraphBuilder};
pub use query::RoadTrip;
