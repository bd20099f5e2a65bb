//! `state_name.tsv` parser
//!
//! Header `statenumber<TAB>stateid<TAB>countryname<TAB>start<TAB>end`.
//! A code may appear on several rows; the last row wins.

use std::path::Path;

use crate::bail_malformed;
use crate::error::Result;
use crate::graph::AliasTable;

pub fn parse_state_names(content: &str, source: &Path) -> Result<AliasTable> {
    let mut aliases = AliasTable::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
        if fields.len() < 3 {
            bail_malformed!(
                source,
                line_no,
                "expected at least 3 tab-separated columns, found {}",
                fields.len()
            );
        }

        let (code, name) = (fields[1], fields[2]);
        if code.is_empty() || name.is_empty() {
            bail_malformed!(source, line_no, "empty state id or country name");
        }
        aliases.insert(code, name);
    }

    Ok(aliases)
}
