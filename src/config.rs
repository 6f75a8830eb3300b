//! Runtime configuration for the classify binary.
//!
//! The outlook directory and monitored locations are explicit values
//! loaded at startup and passed down; nothing here is process-global.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the extracted outlook shapefiles
    pub outlook_dir: PathBuf,

    /// Locations to classify each cycle
    #[serde(default)]
    pub locations: Vec<LocationConfig>,
}

/// One monitored point, typically a recipient's coordinates.
#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    pub name: String,
    pub lon: f64,
    pub lat: f64,

    /// Personal note placed at the top of the alert body
    #[serde(default)]
    pub message: Option<String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}
