//! `borders.txt` parser
//!
//! One country per line: `Country = Neighbor 1,234 km; Other Place 56 km`.
//! Lines without `=` are ignored and an empty right-hand side registers an
//! isolated country.

use std::path::Path;

use crate::bail_malformed;
use crate::error::Result;
use crate::graph::GraphBuilder;

/// A parsed `Country = ...` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderLine {
    pub country: String,
    pub neighbors: Vec<(String, u32)>,
}

/// Parse the whole file into border lines
pub fn parse_borders(content: &str, source: &Path) -> Result<Vec<BorderLine>> {
    let mut lines = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let Some((country, rest)) = line.split_once('=') else {
            continue;
        };

        let country = country.trim();
        if country.is_empty() {
            bail_malformed!(source, line_no, "missing country name before '='");
        }

        let mut neighbors = Vec::new();
        for entry in rest.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            neighbors.push(parse_neighbor(entry, source, line_no)?);
        }

        lines.push(BorderLine {
            country: country.to_string(),
            neighbors,
        });
    }

    Ok(lines)
}

/// Add every border line to the builder. Returns the number of borders added.
pub fn apply_borders(builder: &mut GraphBuilder, lines: &[BorderLine]) -> usize {
    let mut added = 0;
    for line in lines {
        builder.add_country(line.country.as_str());
        for (neighbor, km) in &line.neighbors {
            builder.add_border(&line.country, neighbor, *km);
            added += 1;
        }
    }
    added
}

/// `Congo, Democratic Republic of the 2,410 km` -> (`Congo, Democratic Republic of the`, 2410)
fn parse_neighbor(entry: &str, source: &Path, line_no: usize) -> Result<(String, u32)> {
    let without_unit = entry.strip_suffix("km").unwrap_or(entry).trim_end();

    let Some((name, length)) = without_unit.rsplit_once(char::is_whitespace) else {
        bail_malformed!(source, line_no, "expected '<neighbor> <length> km', got '{}'", entry);
    };

    let name = name.trim();
    if name.is_empty() {
        bail_malformed!(source, line_no, "missing neighbor name in '{}'", entry);
    }

    let Some(km) = parse_km(length) else {
        bail_malformed!(source, line_no, "invalid border length '{}'", length);
    };

    Ok((name.to_string(), km))
}

/// Integer kilometers with optional thousands separators; fractional
/// lengths are rounded.
fn parse_km(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    if let Ok(km) = digits.parse::<u32>() {
        return Some(km);
    }
    let km = digits.parse::<f64>().ok()?;
    if km.is_finite() && km >= 0.0 && km <= f64::from(u32::MAX) {
        Some(km.round() as u32)
    } else {
        None
    }
}
