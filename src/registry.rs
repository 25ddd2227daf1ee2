//! Engine registry and URL building.

use std::sync::Arc;

use tracing::debug;

use crate::engines::{Bing, Brave, CustomEngine, DuckDuckGo, Google, Yandex};
use crate::{DorkError, Engine, EngineConfig, Result, SearchUrl};

/// Registry of the engines dorks are rendered for.
///
/// Lookups are case-insensitive over each engine's shortcut and aliases.
/// Registration order is preserved and used as the default render order.
pub struct EngineRegistry {
    engines: Vec<Arc<dyn Engine>>,
}

impl EngineRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
        }
    }

    /// Creates a registry with the built-in engines.
    pub fn with_defaults() -> Self {
        Self {
            engines: vec![
                Arc::new(Google::new()),
                Arc::new(Bing::new()),
                Arc::new(DuckDuckGo::new()),
                Arc::new(Brave::new()),
                Arc::new(Yandex::new()),
            ],
        }
    }

    /// Registers an engine.
    ///
    /// Fails if the configuration is invalid or if any of its identifiers is
    /// already taken, including by one of its own aliases.
    pub fn add_engine<E: Engine + 'static>(&mut self, engine: E) -> Result<()> {
        engine.config().validate()?;
        self.check_identifiers(engine.config(), &mut Vec::new())?;
        self.push(Arc::new(engine));
        Ok(())
    }

    /// Registers every engine in a JSON engines file.
    ///
    /// All entries are validated against the registry and against each other
    /// before any is added, so a failed call leaves the registry unchanged.
    /// Returns the number of engines added.
    pub fn extend_from_json(&mut self, json: &str) -> Result<usize> {
        let engines = CustomEngine::list_from_json(json)?;

        let mut claimed = Vec::new();
        for engine in &engines {
            self.check_identifiers(engine.config(), &mut claimed)?;
        }

        let count = engines.len();
        for engine in engines {
            self.push(Arc::new(engine));
        }
        Ok(count)
    }

    /// Rejects identifiers that are registered or already in `claimed`.
    ///
    /// Accepted identifiers are appended to `claimed` in lowercase.
    fn check_identifiers(&self, config: &EngineConfig, claimed: &mut Vec<String>) -> Result<()> {
        for id in config.identifiers() {
            let id = id.to_ascii_lowercase();
            if self.contains(&id) || claimed.contains(&id) {
                return Err(DorkError::InvalidEngine(format!(
                    "identifier '{}' is already registered",
                    id
                )));
            }
            claimed.push(id);
        }
        Ok(())
    }

    fn push(&mut self, engine: Arc<dyn Engine>) {
        let config = engine.config();
        debug!(
            "Registered engine {} ({}, dialect {})",
            config.name, config.shortcut, config.dialect
        );
        self.engines.push(engine);
    }

    /// Returns the number of registered engines.
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Returns the registered engines in registration order.
    pub fn engines(&self) -> &[Arc<dyn Engine>] {
        &self.engines
    }

    /// Returns true if `id` names a registered engine.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Looks up an engine by shortcut or alias.
    pub fn get(&self, id: &str) -> Result<Arc<dyn Engine>> {
        self.find(id)
            .cloned()
            .ok_or_else(|| DorkError::UnknownEngine(id.to_string()))
    }

    fn find(&self, id: &str) -> Option<&Arc<dyn Engine>> {
        self.engines.iter().find(|engine| engine.config().matches(id))
    }

    /// Resolves a selection of engine identifiers.
    ///
    /// An empty selection means every enabled engine. Any unknown identifier
    /// fails the whole selection.
    pub fn select(&self, ids: &[String]) -> Result<Vec<Arc<dyn Engine>>> {
        if ids.is_empty() {
            return Ok(self
                .engines
                .iter()
                .filter(|engine| engine.is_enabled())
                .cloned()
                .collect());
        }

        ids.iter().map(|id| self.get(id)).collect()
    }

    /// Translates a canonical query for a registered engine.
    pub fn translate(&self, engine: &str, query: &str) -> Result<String> {
        Ok(self.get(engine)?.translate(query))
    }

    /// Builds the search URL for a canonical query.
    pub fn build_search_url(&self, engine: &str, query: &str) -> Result<SearchUrl> {
        Ok(self.get(engine)?.search_url(query))
    }
}

/// Translates a canonical query for a built-in engine, ignoring case.
///
/// The dialect comes from the engine's registration in
/// [`EngineRegistry::with_defaults`]; unknown identifiers get the identity
/// rule. Engines registered at runtime are translated through
/// [`EngineRegistry::translate`].
pub fn translate(query: &str, engine: &str) -> String {
    match EngineRegistry::with_defaults().get(engine) {
        Ok(engine) => engine.translate(query),
        Err(_) => query.to_string(),
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
