//! Google search engine. Templates are authored in its syntax, so queries pass through unchanged.

use crate::{Dialect, Engine, EngineConfig};

/// Google search engine.
pub struct Google {
    config: EngineConfig,
}

impl Google {
    /// Creates a new Google engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Google".to_string(),
                shortcut: "google".to_string(),
                aliases: vec!["g".to_string()],
                url_template: "https://www.google.com/search?q={query}".to_string(),
                dialect: Dialect::Google,
                enabled: true,
            },
        }
    }

    /// Creates with custom configuration.
    ///
    /// The configuration is not checked here; it is validated when the engine
    /// is registered with [`EngineRegistry::add_engine`](crate::EngineRegistry::add_engine).
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for Google {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Google {
    fn config(&self) -> &EngineConfig {
        &self.config
    }
}
