//! DuckDuckGo search engine.

use crate::{Dialect, Engine, EngineConfig};

/// DuckDuckGo search engine.
pub struct DuckDuckGo {
    config: EngineConfig,
}

impl DuckDuckGo {
    /// Creates a new DuckDuckGo engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "DuckDuckGo".to_string(),
                shortcut: "duckduckgo".to_string(),
                aliases: vec!["ddg".to_string()],
                url_template: "https://duckduckgo.com/?q={query}".to_string(),
                dialect: Dialect::DuckDuckGo,
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

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for DuckDuckGo {
    fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duckduckgo_new() {
        let engine = DuckDuckGo::new();
        assert_eq!(engine.config.name, "DuckDuckGo");
        assert_eq!(engine.config.shortcut, "duckduckgo");
        assert_eq!(engine.config.aliases, vec!["ddg"]);
        assert_eq!(engine.config.dialect, Dialect::DuckDuckGo);
        assert!(engine.config.enabled);
    }

    #[test]
    fn test_duckduckgo_matches_alias() {
        let engine = DuckDuckGo::default();
        assert!(engine.config().matches("DDG"));
        assert!(engine.config().matches("duckduckgo"));
    }

    #[test]
    fn test_duckduckgo_search_url() {
        let engine = DuckDuckGo::new();
        let url = engine.search_url("inurl:admin -login");
        assert_eq!(
            url.as_str(),
            "https://duckduckgo.com/?q=%22admin%22%20-%22login%22"
        );
    }
}
