//! Configuration for roadtrip
//!
//! Looked up in order: an explicit path, `./roadtrip.toml`, then
//! `config.toml` in the user config directory (`$ROADTRIP_CONFIG_DIR`
//! overrides the platform default). A missing file means defaults.
//! Relative data paths are anchored at the directory of the file that
//! declared them.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RoadTripError};

pub use types::{
    Config, DataPaths, DEFAULT_BORDERS_FILE, DEFAULT_CAPDIST_FILE, DEFAULT_STATE_NAMES_FILE,
};

pub const LOCAL_CONFIG_FILE: &str = "roadtrip.toml";
const CONFIG_DIR: &str = "roadtrip";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROADTRIP_CONFIG_DIR";

impl Config {
    /// Load configuration, searching the standard locations when `explicit` is `None`.
    ///
    /// An explicit path that does not exist is an error; the standard
    /// locations are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(RoadTripError::io_operation(
                    "read config",
                    path.display(),
                    "file does not exist",
                ));
            }
            return Self::load_file(path);
        }

        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::load_file(&candidate);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse a single config file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RoadTripError::io_operation("read config", path.display(), e))?;
        let config = Self::from_toml(&content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self {
            data: config.data.relative_to(base),
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dir) = Self::user_config_dir() {
            paths.push(dir.join(CONFIG_FILE));
        }
        paths
    }

    fn user_config_dir() -> Option<PathBuf> {
        // Allow environment variable override for testing
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.data.borders, PathBuf::from("borders.txt"));
        assert_eq!(config.data.capdist, PathBuf::from("capdist.csv"));
        assert_eq!(config.data.state_names, PathBuf::from("state_name.tsv"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("[data]\nborders = \"world/borders.txt\"\n").unwrap();
        assert_eq!(config.data.borders, PathBuf::from("world/borders.txt"));
        assert_eq!(config.data.capdist, PathBuf::from("capdist.csv"));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("[data]\nborderz = \"x\"\n").unwrap_err();
        assert!(matches!(err, RoadTripError::Toml(_)));
    }

    #[test]
    fn test_relative_paths_anchor_at_config_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roadtrip.toml");
        fs::write(
            &path,
            "[data]\nborders = \"b.txt\"\ncapdist = \"/abs/capdist.csv\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.data.borders, dir.path().join("b.txt"));
        assert_eq!(config.data.capdist, PathBuf::from("/abs/capdist.csv"));
        assert_eq!(config.data.state_names, dir.path().join("state_name.tsv"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("file does not exist"));
    }
}
