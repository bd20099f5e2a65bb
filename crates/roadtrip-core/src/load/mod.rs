//! Data loading for the country graph
//!
//! Three inputs are combined in a fixed order:
//! 1. `state_name.tsv` builds the alias table (needed to decode capdist codes)
//! 2. `borders.txt` defines the topology, with border lengths as initial weights
//! 3. `capdist.csv` replaces weights with capital distances for bordering pairs
//!
//! Every failure is returned to the caller; nothing here exits the process.

pub mod borders;
pub mod capdist;
pub mod state_names;

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::DataPaths;
use crate::error::{Result, RoadTripError};
use crate::graph::{CountryGraph, GraphBuilder};
use crate::trace_time;

pub use borders::{apply_borders, parse_borders, BorderLine};
pub use capdist::{apply_capdist, parse_capdist, CapitalDistance};
pub use state_names::parse_state_names;

/// Read and combine the three data files
#[tracing::instrument(skip(paths), fields(borders = %paths.borders.display()))]
pub fn load_graph(paths: &DataPaths) -> Result<CountryGraph> {
    let start = Instant::now();

    let state_names = read_source(&paths.state_names)?;
    let borders = read_source(&paths.borders)?;
    let capdist = read_source(&paths.capdist)?;
    trace_time!(start, "read_sources");

    let graph = GraphSources {
        borders: (borders.as_str(), paths.borders.as_path()),
        capdist: (capdist.as_str(), paths.capdist.as_path()),
        state_names: (state_names.as_str(), paths.state_names.as_path()),
    }
    .build()?;
    trace_time!(start, "load_graph");

    Ok(graph)
}

/// In-memory contents of the three inputs, each paired with the path used
/// in error messages
#[derive(Debug, Clone, Copy)]
pub struct GraphSources<'a> {
    pub borders: (&'a str, &'a Path),
    pub capdist: (&'a str, &'a Path),
    pub state_names: (&'a str, &'a Path),
}

impl<'a> GraphSources<'a> {
    /// Sources labelled with the default file names
    pub fn new(borders: &'a str, capdist: &'a str, state_names: &'a str) -> Self {
        Self {
            borders: (borders, Path::new(crate::config::DEFAULT_BORDERS_FILE)),
            capdist: (capdist, Path::new(crate::config::DEFAULT_CAPDIST_FILE)),
            state_names: (state_names, Path::new(crate::config::DEFAULT_STATE_NAMES_FILE)),
        }
    }

    pub fn build(&self) -> Result<CountryGraph> {
        let aliases = parse_state_names(self.state_names.0, self.state_names.1)?;
        tracing::debug!(aliases = aliases.len(), "parsed state names");

        let border_lines = parse_borders(self.borders.0, self.borders.1)?;
        let capitals = parse_capdist(self.capdist.0, self.capdist.1)?;

        let mut builder = GraphBuilder::with_aliases(aliases.clone());
        let borders = apply_borders(&mut builder, &border_lines);
        tracing::debug!(countries = border_lines.len(), borders, "applied borders");

        let updated = apply_capdist(&mut builder, &aliases, &capitals);
        tracing::debug!(rows = capitals.len(), updated, "applied capital distances");

        Ok(builder.build())
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| RoadTripError::io_operation("read", path.display(), e))
}
