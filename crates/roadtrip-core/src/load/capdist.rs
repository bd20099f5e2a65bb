//! `capdist.csv` parser
//!
//! Header `numa,ida,numb,idb,kmdist,midist`, one capital pair per row.

use std::path::Path;

use crate::bail_malformed;
use crate::error::Result;
use crate::graph::{AliasTable, GraphBuilder};

/// A capital-to-capital distance between two country codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapitalDistance {
    pub code_a: String,
    pub code_b: String,
    pub km: u32,
}

/// Parse every data row; the first line is the header
pub fn parse_capdist(content: &str, source: &Path) -> Result<Vec<CapitalDistance>> {
    let mut rows = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 5 {
            bail_malformed!(
                source,
                line_no,
                "expected at least 5 columns, found {}",
                fields.len()
            );
        }

        let Ok(km) = fields[4].parse::<u32>() else {
            bail_malformed!(source, line_no, "invalid kmdist '{}'", fields[4]);
        };

        rows.push(CapitalDistance {
            code_a: fields[1].to_string(),
            code_b: fields[3].to_string(),
            km,
        });
    }

    Ok(rows)
}

/// Replace border weights with capital distances.
///
/// Rows whose codes do not decode, or whose countries do not share a
/// border, are ignored. Returns the number of borders updated.
pub fn apply_capdist(
    builder: &mut GraphBuilder,
    aliases: &AliasTable,
    rows: &[CapitalDistance],
) -> usize {
    let mut updated = 0;
    for row in rows {
        let (Some(a), Some(b)) = (aliases.decode(&row.code_a), aliases.decode(&row.code_b)) else {
            continue;
        };
        if builder.set_distance(a, b, row.km) {
            updated += 1;
        }
    }
    updated
}
