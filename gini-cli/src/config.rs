//! TOML run configuration.
//!
//! A run file can pin the seed, describe the population and supply the
//! bracket table, so a simulation can be repeated without retyping flags.
//! Command-line flags always win over values read from the file.
//!
//! ```toml
//! seed = 42
//!
//! [population]
//! mode = "banded"
//! groups = 10
//! group_span = 100000
//! group_sizes = [40, 50, 60, 20, 30, 40, 30, 50, 40, 20]
//!
//! [[brackets]]
//! width = 50000
//! rate = 25
//!
//! [[brackets]]
//! width = 300000
//! rate = 10
//! ```
//!
//! Instead of `[population]`, `scenario = "sweden"` picks a built-in preset.

use std::path::{Path, PathBuf};

use gini_core::{BracketTable, GenerationMode};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config sets both `scenario` and `population`; pick one")]
    ConflictingPopulation,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Seed for the population generator.
    pub seed: Option<u64>,

    /// Name of a built-in scenario.
    pub scenario: Option<String>,

    pub population: Option<GenerationMode>,

    pub brackets: Option<BracketTable>,
}

impl RunConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: RunConfig = toml::from_str(input)?;
        if config.scenario.is_some() && config.population.is_some() {
            return Err(ConfigError::ConflictingPopulation);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
