//! Search engine trait and configuration.

use serde::{Deserialize, Serialize};

use crate::{Dialect, DorkError, Result, SearchUrl};

/// Placeholder for the encoded query inside a URL template.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// Configuration for a search engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name of the engine.
    pub name: String,
    /// Canonical lowercase identifier (e.g., "duckduckgo").
    pub shortcut: String,
    /// Alternative identifiers (e.g., "ddg").
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Search URL with a single `{query}` placeholder.
    pub url_template: String,
    /// Translation rule applied before encoding.
    #[serde(default)]
    pub dialect: Dialect,
    /// Whether the engine takes part in "all engines" selection.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl EngineConfig {
    /// Creates a configuration using the canonical dialect.
    pub fn new(
        name: impl Into<String>,
        shortcut: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
            aliases: Vec::new(),
            url_template: url_template.into(),
            dialect: Dialect::Google,
            enabled: true,
        }
    }

    /// Sets the translation rule.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Adds an alternative identifier.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Marks the engine as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Returns the shortcut followed by every alias.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.shortcut.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Returns true if `id` names this engine, ignoring case.
    pub fn matches(&self, id: &str) -> bool {
        self.identifiers().any(|known| known.eq_ignore_ascii_case(id))
    }

    /// Checks identifiers and the URL template.
    ///
    /// The template must hold exactly one placeholder and must form an
    /// absolute http(s) URL once a query is substituted.
    pub fn validate(&self) -> Result<()> {
        for id in self.identifiers() {
            if id.is_empty() || id.chars().any(char::is_whitespace) {
                return Err(DorkError::InvalidEngine(format!(
                    "'{}' has an invalid identifier '{}'",
                    self.name, id
                )));
            }
        }

        let placeholders = self.url_template.matches(QUERY_PLACEHOLDER).count();
        if placeholders != 1 {
            return Err(DorkError::InvalidEngine(format!(
                "'{}' URL template must contain exactly one {} placeholder, found {}",
                self.name, QUERY_PLACEHOLDER, placeholders
            )));
        }

        let sample = self.url_template.replace(QUERY_PLACEHOLDER, "test");
        let url = url::Url::parse(&sample)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DorkError::InvalidEngine(format!(
                "'{}' URL template uses unsupported scheme '{}'",
                self.name,
                url.scheme()
            )));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            shortcut: String::new(),
            aliases: Vec::new(),
            url_template: String::new(),
            dialect: Dialect::Google,
            enabled: true,
        }
    }
}

/// Trait for search engines that dorks can be rendered for.
///
/// An engine is fully described by its configuration: the URL template and
/// the dialect. Implementors only need to provide [`Engine::config`].
pub trait Engine: Send + Sync {
    /// Returns the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Rewrites a canonical query into this engine's syntax.
    fn translate(&self, query: &str) -> String {
        self.config().dialect.translate(query)
    }

    /// Builds the search URL for a canonical query.
    fn search_url(&self, query: &str) -> SearchUrl {
        let rewritten = self.translate(query);
        let encoded = urlencoding::encode(&rewritten);
        SearchUrl::new(
            self.config()
                .url_template
                .replacen(QUERY_PLACEHOLDER, &encoded, 1),
        )
    }

    /// Returns the engine name.
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Returns the engine shortcut.
    fn shortcut(&self) -> &str {
        &self.config().shortcut
    }

    /// Returns the engine dialect.
    fn dialect(&self) -> Dialect {
        self.config().dialect
    }

    /// Returns whether the engine is enabled.
    fn is_enabled(&self) -> bool {
        self.config().enabled
    }
}
