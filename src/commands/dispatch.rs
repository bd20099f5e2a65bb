//! Command dispatch logic for roadtrip

use std::time::Instant;

use crate::cli::{Cli, Commands};
use roadtrip_core::config::{Config, DataPaths};
use roadtrip_core::error::Result;
use roadtrip_core::load::load_graph;
use roadtrip_core::RoadTrip;
use tracing::debug;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Data file locations: config file values overridden by CLI flags
    pub fn data_paths(&self) -> Result<DataPaths> {
        let config = Config::load(self.cli.config.as_deref())?;
        let mut paths = config.data;

        if let Some(path) = &self.cli.borders {
            paths.borders = path.clone();
        }
        if let Some(path) = &self.cli.capdist {
            paths.capdist = path.clone();
        }
        if let Some(path) = &self.cli.state_names {
            paths.state_names = path.clone();
        }

        Ok(paths)
    }

    /// Load the graph and wrap it in the query facade
    pub fn load_roadtrip(&self) -> Result<RoadTrip> {
        let paths = self.data_paths()?;
        let graph = load_graph(&paths)?;
        debug!(
            elapsed = ?self.start.elapsed(),
            countries = graph.node_count(),
            "load_graph"
        );
        Ok(RoadTrip::new(graph))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let trip = ctx.load_roadtrip()?;
        match self {
            Commands::Distance { from, to } => super::distance::execute(ctx.cli, &trip, from, to),
            Commands::Route { from, to } => super::route::execute(ctx.cli, &trip, from, to),
            Commands::Countries => super::countries::execute(ctx.cli, &trip),
            Commands::Interactive => super::interactive::execute(ctx.cli, &trip),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    let result = match &cli.command {
        None => Commands::Interactive.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    debug!(elapsed = ?start.elapsed(), "run");
    result
}
