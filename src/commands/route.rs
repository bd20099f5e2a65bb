//! `roadtrip route`

use std::io::{self, Write};

use crate::cli::{Cli, OutputFormat};
use roadtrip_core::error::Result;
use roadtrip_core::graph::RouteReport;
use roadtrip_core::RoadTrip;

/// Execute the route command
///
/// An unreachable pair is reported, not treated as a failure.
pub fn execute(cli: &Cli, trip: &RoadTrip, from: &str, to: &str) -> Result<()> {
    let report = trip.try_route(from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            let stdout = io::stdout();
            write_route_human(&mut stdout.lock(), &report)?;
        }
    }

    Ok(())
}

/// Human-readable route, shared with the interactive prompt
pub fn write_route_human<W: Write>(out: &mut W, report: &RouteReport) -> io::Result<()> {
    if !report.found {
        return writeln!(
            out,
            "No path found between {} and {}",
            report.from, report.to
        );
    }

    writeln!(out, "Route from {} to {}:", report.from, report.to)?;
    for step in &report.route {
        writeln!(out, "* {}", step)?;
    }
    Ok(())
}
