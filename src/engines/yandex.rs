//! Yandex search engine.

use crate::{Dialect, Engine, EngineConfig};

/// Yandex search engine.
pub struct Yandex {
    config: EngineConfig,
}

impl Yandex {
    /// Creates a new Yandex engine.
    pub fn new() -> Self {
        Self {
            config: EngineConfig {
                name: "Yandex".to_string(),
                shortcut: "yandex".to_string(),
                aliases: Vec::new(),
                url_template: "https://yandex.com/search/?text={query}".to_string(),
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

impl Default for Yandex {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Yandex {
    fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yandex_uses_text_parameter() {
        let engine = Yandex::new();
        let url = engine.search_url("site:example.com intitle:login");
        assert!(url.as_str().starts_with("https://yandex.com/search/?text="));
        assert_eq!(
            url.query_param("text").as_deref(),
            Some("site:example.com intitle:login")
        );
    }

    #[test]
    fn test_yandex_config() {
        let engine = Yandex::new();
        assert_eq!(engine.name(), "Yandex");
        assert_eq!(engine.dialect(), Dialect::Google);
        assert!(engine.config().validate().is_ok());
    }
}
