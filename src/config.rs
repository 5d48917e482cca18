//! Configuration for the ProNet query services
//!
//! Settings load from YAML. Anything not present in the file keeps its default.

use pronet_graph_algorithms::PageRankConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading configuration or network documents
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Network has no list of programmers")]
    NoProgrammers,

    #[error("Network has a programmer with no name (entry {0})")]
    MissingName(usize),

    #[error("Network has a programmer with no recommendations: {0}")]
    MissingRecommendations(String),

    #[error("Network has a programmer with no skills: {0}")]
    MissingSkills(String),

    #[error("Network has more than one programmer named {0}")]
    DuplicateProgrammer(String),

    #[error("Programmer {programmer} recommends unknown programmer {target}")]
    UnknownRecommendation { programmer: String, target: String },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Rank engine settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of relaxation rounds
    pub iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        let defaults = PageRankConfig::default();
        Self {
            damping_factor: defaults.damping_factor,
            iterations: defaults.iterations,
        }
    }
}

impl From<RankConfig> for PageRankConfig {
    fn from(config: RankConfig) -> Self {
        PageRankConfig {
            damping_factor: config.damping_factor,
            iterations: config.iterations,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProNetConfig {
    pub rank: RankConfig,
}

impl ProNetConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        let config: ProNetConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let d = self.rank.damping_factor;
        if !(d > 0.0 && d < 1.0) {
            return Err(ConfigError::InvalidSetting(format!(
                "rank.damping_factor must be between 0 and 1, got {}",
                d
            )));
        }

        if self.rank.iterations == 0 {
            return Err(ConfigError::InvalidSetting(
                "rank.iterations must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
