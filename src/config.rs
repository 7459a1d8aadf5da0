use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Kairos model file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Default number of steps to forecast.
    #[serde(default = "default_horizon")]
    pub horizon: usize,

    /// Model definition.
    pub model: ModelToml,

    /// Observed history.
    #[serde(default)]
    pub data: DataToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    /// `"ar"` or `"ma"`.
    pub kind: String,
    #[serde(default)]
    pub weights: Vec<f64>,
    #[serde(default)]
    pub constant: f64,
    /// Innovation variance; only meaningful for MA models.
    #[serde(default)]
    pub variance: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DataToml {
    /// Observations, oldest first.
    #[serde(default)]
    pub history: Vec<f64>,
}

fn default_horizon() -> usize {
    1
}

impl KairosConfig {
    /// Reads and parses a model file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
