//! Configuration handling for the conserv CLI
//!
//! Supports loading configuration from conserv.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use conserv_core::{Alphabet, EngineConfig, ResourceBudget, Schedule, ScoringConfig, DEFAULT_MAX_CELLS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "conserv.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub engine: EngineSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default number of threads to use
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest DP state space (in cells) any aligner may allocate
    #[serde(default = "default_max_cells")]
    pub max_cells: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineSection {
    /// Symbols accepted in input sequences
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Fill order for the N-way LCS state space
    #[serde(default)]
    pub schedule: Schedule,
}

// Default value functions
fn default_threads() -> usize { num_cpus::get() }
fn default_max_cells() -> u64 { DEFAULT_MAX_CELLS }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { threads: default_threads() }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self { max_cells: default_max_cells() }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        Self::default().to_toml()
    }

    /// Settings handed to the alignment engine
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            scoring: self.scoring,
            budget: ResourceBudget::new(self.limits.max_cells),
            alphabet: self.engine.alphabet,
            schedule: self.engine.schedule,
        }
    }
}
