//! Bing search engine.

use crate::{Dialect, Engine, EngineConfig};

/// Bing search engine.
pub struct Bing {
    config: EngineConfig,
}

impl Bing {
    /// Creates a new Bing engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Bing".to_string(),
                shortcut: "bing".to_string(),
                aliases: Vec::new(),
                url_template: "https://www.bing.com/search?q={query}".to_string(),
                dialect: Dialect::Bing,
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

impl Default for Bing {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Bing {
    fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bing_new() {
        let engine = Bing::new();
        assert_eq!(engine.name(), "Bing");
        assert_eq!(engine.shortcut(), "bing");
        assert_eq!(engine.dialect(), Dialect::Bing);
        assert!(engine.config().validate().is_ok());
    }

    #[test]
    fn test_bing_with_config() {
        let config = EngineConfig::new("Bing CN", "bing_cn", "https://cn.bing.com/search?q={query}")
            .with_dialect(Dialect::Bing);
        let engine = Bing::new().with_config(config);
        assert_eq!(engine.shortcut(), "bing_cn");
        assert!(engine.search_url("a").as_str().starts_with("https://cn.bing.com/"));
    }

    #[test]
    fn test_bing_search_url_uses_not_and_or() {
        let engine = Bing::new();
        let url = engine.search_url("inurl:admin | inurl:login -test");
        assert_eq!(
            url.query_param("q").as_deref(),
            Some("inurl:admin  OR  inurl:login NOT test")
        );
    }
}
