//! Registry configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Largest graph the bundled Python client would ever request
pub const CLIENT_MAX_GRAPH_SIZE: u32 = 4096;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Graph registry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum node count accepted by `create` (None = unlimited)
    pub max_graph_size: Option<u32>,
    /// Capacity hint for the handle table
    pub initial_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_graph_size: None,
            initial_capacity: 16,
        }
    }
}

impl RegistryConfig {
    /// Configuration capped at the client-side graph size limit
    pub fn bounded() -> Self {
        Self {
            max_graph_size: Some(CLIENT_MAX_GRAPH_SIZE),
            ..Self::default()
        }
    }

    pub fn with_max_graph_size(mut self, limit: u32) -> Self {
        self.max_graph_size = Some(limit);
        self
    }

    /// Parse configuration from YAML; missing keys take their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }
}
