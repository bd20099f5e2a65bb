//! Configuration types

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_BORDERS_FILE: &str = "borders.txt";
pub const DEFAULT_CAPDIST_FILE: &str = "capdist.csv";
pub const DEFAULT_STATE_NAMES_FILE: &str = "state_name.tsv";

/// Top-level `roadtrip.toml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataPaths,
}

/// Locations of the three input files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataPaths {
    /// `Country = Neighbor 123 km; ...` border list
    #[serde(default = "default_borders")]
    pub borders: PathBuf,
    /// Pairwise capital distances (CSV)
    #[serde(default = "default_capdist")]
    pub capdist: PathBuf,
    /// Country code to name table (TSV)
    #[serde(default = "default_state_names")]
    pub state_names: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            borders: default_borders(),
            capdist: default_capdist(),
            state_names: default_state_names(),
        }
    }
}

impl DataPaths {
    /// Anchor relative paths at `base`; absolute paths are left alone.
    pub fn relative_to(mut self, base: &Path) -> Self {
        for path in [&mut self.borders, &mut self.capdist, &mut self.state_names] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

fn default_borders() -> PathBuf {
    PathBuf::from(DEFAULT_BORDERS_FILE)
}

fn default_capdist() -> PathBuf {
    PathBuf::from(DEFAULT_CAPDIST_FILE)
}

fn default_state_names() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_NAMES_FILE)
}
