//! Rendered dork types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fully-qualified search URL with the query percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchUrl(String);

impl SearchUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    /// Returns the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the URL, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the decoded value of a query parameter, if present.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let url = url::Url::parse(&self.0).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

impl fmt::Display for SearchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One engine's rendition of a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineLink {
    /// Engine shortcut.
    pub engine: String,
    /// Translated query, shown to the user.
    pub query: String,
    /// Search URL for the translated query.
    pub url: SearchUrl,
}

/// A single pattern with one link per selected engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPattern {
    /// Canonical query after target substitution.
    pub pattern: String,
    /// Links in engine selection order.
    pub links: Vec<EngineLink>,
}

impl RenderedPattern {
    /// Returns the link for an engine shortcut.
    pub fn link(&self, engine: &str) -> Option<&EngineLink> {
        self.links
            .iter()
            .find(|link| link.engine.eq_ignore_ascii_case(engine))
    }
}

/// A catalog record ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedDork {
    /// Record title.
    pub title: String,
    /// Rendered patterns, in catalog order.
    pub patterns: Vec<RenderedPattern>,
}

impl RenderedDork {
    /// Total number of links across all patterns.
    pub fn link_count(&self) -> usize {
        self.patterns.iter().map(|p| p.links.len()).sum()
    }
}
