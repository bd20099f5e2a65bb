//! CLI argument parsing for roadtrip
//!
//! Global flags select the data files, output format and logging; the
//! subcommand picks the query. With no subcommand the interactive prompt runs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use roadtrip_core::format::OutputFormat;

/// Shortest distances and border-crossing routes between countries
#[derive(Parser, Debug)]
#[command(name = "roadtrip")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./roadtrip.toml, then the user config directory)
    #[arg(long, global = true, env = "ROADTRIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Border list (`Country = Neighbor 123 km; ...`)
    #[arg(long, global = true)]
    pub borders: Option<PathBuf>,

    /// Capital distance table (CSV)
    #[arg(long, global = true)]
    pub capdist: Option<PathBuf>,

    /// Country code to name table (TSV)
    #[arg(long, global = true)]
    pub state_names: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest travel distance between two countries
    Distance {
        /// First country (name, part of a name, or country code)
        from: String,
        /// Second country
        to: String,
    },

    /// Route with the fewest border crossings between two countries
    Route {
        /// First country (name, part of a name, or country code)
        from: String,
        /// Second country
        to: String,
    },

    /// List every known country
    Countries,

    /// Prompt for country pairs until EXIT (default)
    Interactive,
}
