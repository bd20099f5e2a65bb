//! `roadtrip countries`

use crate::cli::{Cli, OutputFormat};
use roadtrip_core::error::Result;
use roadtrip_core::RoadTrip;

/// Execute the countries command
pub fn execute(cli: &Cli, trip: &RoadTrip) -> Result<()> {
    let countries = trip.countries();
    let issues = trip.issues();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "countries": countries, "issues": issues });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for country in &countries {
                println!("{}", country);
            }
            if !cli.quiet && !issues.is_empty() {
                eprintln!("warning: {} structural issue(s) in the data", issues.len());
            }
        }
    }

    Ok(())
}
