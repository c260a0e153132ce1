//! Configuration loading for trana-nav

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TranaConfig {
    #[serde(default)]
    pub exploration: ExplorationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Exploration settings
#[derive(Clone, Debug, Deserialize)]
pub struct ExplorationConfig {
    /// Iteration cap for the explore phase (default: 10000)
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

/// Output settings
#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Directory where audit logs are written (default: "logs")
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_max_iterations() -> usize {
    10_000
}
fn default_log_dir() -> String {
    "logs".to_string()
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}

impl TranaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TranaConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// `trana.toml` in the working directory if present, defaults otherwise.
    pub fn discover() -> Result<Self> {
        let default_path = Path::new("trana.toml");
        if default_path.exists() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }
}
