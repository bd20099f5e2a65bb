//! Graphs shared by the algorithm tests

use crate::graph::store::{CountryGraph, GraphBuilder};

/// Western Europe plus an isolated Madagascar.
///
/// Weights are capital-to-capital kilometers.
pub fn europe() -> CountryGraph {
    let mut builder = GraphBuilder::new();
    builder
        .add_border("France", "Spain", 623)
        .add_border("France", "Belgium", 262)
        .add_border("France", "Germany", 878)
        .add_border("France", "Switzerland", 435)
        .add_border("France", "Italy", 1106)
        .add_border("Belgium", "Germany", 601)
        .add_border("Belgium", "Netherlands", 173)
        .add_border("Netherlands", "Germany", 577)
        .add_border("Germany", "Switzerland", 750)
        .add_border("Germany", "Austria", 524)
        .add_border("Switzerland", "Italy", 688)
        .add_border("Switzerland", "Austria", 683)
        .add_border("Austria", "Italy", 764)
        .add_border("Spain", "Portugal", 502)
        .add_country("Madagascar")
        .alias("FRN", "France")
        .alias("SPN", "Spain")
        .alias("MAG", "Madagascar");
    builder.build()
}

/// A heavy direct edge next to a light two-hop detour: `A-C` is 100 km,
/// `A-B-C` is 20 km.
pub fn detour() -> CountryGraph {
    let mut builder = GraphBuilder::new();
    builder
        .add_border("A", "C", 100)
        .add_border("A", "B", 10)
        .add_border("B", "C", 10);
    builder.build()
}
