//! Engines defined entirely by configuration.

use crate::{Engine, EngineConfig, Result};

/// A search engine loaded from an engines file.
///
/// The configuration is validated on construction, so a `CustomEngine`
/// always produces well-formed URLs.
#[derive(Debug, Clone)]
pub struct CustomEngine {
    config: EngineConfig,
}

impl CustomEngine {
    /// Creates an engine from a validated configuration.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Parses a JSON array of engine configurations.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let configs: Vec<EngineConfig> = serde_json::from_str(json)?;
        configs.into_iter().map(Self::from_config).collect()
    }
}

impl Engine for CustomEngine {
    fn config(&self) -> &EngineConfig {
        &self.config
    }
}
