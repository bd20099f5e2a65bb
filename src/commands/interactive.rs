//! Interactive prompt loop
//!
//! Asks for two countries, prints the route between them and the shortest
//! distance, and repeats until `EXIT` (any case) or end of input.

use std::io::{self, BufRead, Write};

use super::route::write_route_human;
use crate::cli::{Cli, OutputFormat};
use roadtrip_core::error::Result;
use roadtrip_core::RoadTrip;

const FIRST_PROMPT: &str = "Enter the name of the first country (type EXIT to quit): ";
const SECOND_PROMPT: &str = "Enter the name of the second country (type EXIT to quit): ";
const INVALID_COUNTRY: &str = "Invalid country name. Please enter a valid country name.";

/// Execute the interactive command on stdin/stdout
pub fn execute(cli: &Cli, trip: &RoadTrip) -> Result<()> {
    if cli.format == OutputFormat::Json {
        tracing::warn!("--format json is ignored by the interactive prompt");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(trip, stdin.lock(), &mut stdout.lock())
}

/// Drive the prompt loop over arbitrary input and output
pub fn run_loop<R: BufRead, W: Write>(trip: &RoadTrip, mut input: R, out: &mut W) -> Result<()> {
    loop {
        let Some(first) = prompt(&mut input, out, FIRST_PROMPT)? else {
            break;
        };
        if !trip.resolver().is_valid(&first) {
            writeln!(out, "{}", INVALID_COUNTRY)?;
            continue;
        }

        let Some(second) = prompt(&mut input, out, SECOND_PROMPT)? else {
            break;
        };
        if !trip.resolver().is_valid(&second) {
            writeln!(out, "{}", INVALID_COUNTRY)?;
            continue;
        }

        // Both names resolve, so only the no-path case is left
        let report = trip.try_route(&first, &second)?;
        write_route_human(out, &report)?;
        if let Some(distance) = trip.distance(&first, &second) {
            writeln!(out, "Shortest distance: {}", distance)?;
        }
    }

    Ok(())
}

/// Show a prompt and read one trimmed line; `None` on EXIT or end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }

    let answer = line.trim();
    if answer.eq_ignore_ascii_case("EXIT") {
        return Ok(None);
    }
    Ok(Some(answer.to_string()))
}
