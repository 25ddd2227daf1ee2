//! Template catalog sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{Catalog, Result};

/// Trait for loading a template catalog.
///
/// Loading happens once per process; the resulting [`Catalog`] is an
/// immutable snapshot that callers pass to every render.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Loads and validates the catalog.
    async fn load(&self) -> Result<Catalog>;

    /// Human-readable location, used in logs.
    fn location(&self) -> &str;
}

/// The catalog compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

#[async_trait]
impl TemplateSource for BuiltinSource {
    async fn load(&self) -> Result<Catalog> {
        Catalog::builtin()
    }

    fn location(&self) -> &str {
        "builtin"
    }
}

/// A catalog stored in a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    /// Creates a source for the given path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl TemplateSource for FileSource {
    async fn load(&self) -> Result<Catalog> {
        debug!("Reading catalog from {}", self.display);
        let json = tokio::fs::read_to_string(&self.path).await?;
        Catalog::from_json(&json)
    }

    fn location(&self) -> &str {
        &self.display
    }
}

/// A catalog fetched over HTTP.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Creates a source with a default client.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; a3s-dork/0.1)")
            .build()?;
        Ok(Self::with_client(client, url))
    }

    /// Creates a source with a custom reqwest client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl TemplateSource for HttpSource {
    async fn load(&self) -> Result<Catalog> {
        debug!("Fetching catalog from {}", self.url);
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let json = response.text().await?;
        Catalog::from_json(&json)
    }

    fn location(&self) -> &str {
        &self.url
    }
}

/// Picks a source for a catalog location.
///
/// `None` selects the built-in catalog, `http(s)://` locations are fetched,
/// and anything else is read as a file path.
pub fn source_for(location: Option<&str>) -> Result<Box<dyn TemplateSource>> {
    match location {
        None => Ok(Box::new(BuiltinSource)),
        Some(loc) if loc.starts_with("http://") || loc.starts_with("https://") => {
            Ok(Box::new(HttpSource::new(loc)?))
        }
        Some(loc) => Ok(Box::new(FileSource::new(loc))),
    }
}
