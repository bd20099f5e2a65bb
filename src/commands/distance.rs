//! `roadtrip distance`

use crate::cli::{Cli, OutputFormat};
use roadtrip_core::error::Result;
use roadtrip_core::RoadTrip;

/// Execute the distance command
///
/// Unknown countries and unreachable pairs are returned as errors so the
/// process exits with the data error code.
pub fn execute(cli: &Cli, trip: &RoadTrip, from: &str, to: &str) -> Result<()> {
    let report = trip.try_distance(from, to)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("{} -> {}: {}", report.from, report.to, report.distance_km);
        }
    }

    Ok(())
}
