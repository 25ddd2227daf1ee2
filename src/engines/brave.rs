//! Brave search engine.
//!
//! Brave accepts the Google operator subset used by dork templates.

use crate::{Dialect, Engine, EngineConfig};

/// Brave search engine.
pub struct Brave {
    config: EngineConfig,
}

impl Brave {
    /// Creates a new Brave engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Brave".to_string(),
                shortcut: "brave".to_string(),
                aliases: Vec::new(),
                url_template: "https://search.brave.com/search?q={query}".to_string(),
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

impl Default for Brave {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Brave {
    fn config(&self) -> &EngineConfig {
        &self.config
    }
}
