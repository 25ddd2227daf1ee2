//! Dork templates and target substitution.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{DorkError, Result};

/// Placeholder domain every template is authored against.
pub const PLACEHOLDER_DOMAIN: &str = "example.com";

const BUILTIN_CATALOG: &str = include_str!("../data/dorks.json");

/// The `dork` field of a template: one pattern or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DorkPatterns {
    Single(String),
    Many(Vec<String>),
}

impl DorkPatterns {
    /// Returns the patterns as a slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            DorkPatterns::Single(pattern) => std::slice::from_ref(pattern),
            DorkPatterns::Many(patterns) => patterns,
        }
    }

    fn map(&self, f: impl Fn(&str) -> String) -> Self {
        match self {
            DorkPatterns::Single(pattern) => DorkPatterns::Single(f(pattern)),
            DorkPatterns::Many(patterns) => {
                DorkPatterns::Many(patterns.iter().map(|p| f(p)).collect())
            }
        }
    }
}

/// A catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DorkTemplate {
    /// Human-readable title.
    pub title: String,
    /// Canonical patterns containing the placeholder domain.
    pub dork: DorkPatterns,
}

impl DorkTemplate {
    /// Creates a template with a single pattern.
    pub fn new(title: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            dork: DorkPatterns::Single(pattern.into()),
        }
    }

    /// Creates a template with several patterns.
    pub fn with_patterns(title: impl Into<String>, patterns: Vec<String>) -> Self {
        Self {
            title: title.into(),
            dork: DorkPatterns::Many(patterns),
        }
    }

    /// Returns the patterns of this template.
    pub fn patterns(&self) -> &[String] {
        self.dork.as_slice()
    }

    /// Returns a copy with the placeholder domain replaced by `target`.
    pub fn with_target(&self, target: &str) -> Self {
        Self {
            title: self.title.clone(),
            dork: self.dork.map(|p| p.replace(PLACEHOLDER_DOMAIN, target)),
        }
    }
}

/// Record shape used while validating catalog input.
#[derive(Deserialize)]
struct RawTemplate {
    title: Option<String>,
    dork: Option<DorkPatterns>,
}

/// An immutable, ordered snapshot of dork templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    templates: Vec<DorkTemplate>,
}

impl Catalog {
    /// Creates a catalog from already-validated templates.
    pub fn new(templates: Vec<DorkTemplate>) -> Self {
        Self { templates }
    }

    /// Parses a JSON array of `{ "title", "dork" }` records.
    ///
    /// Every record must carry a title and at least one pattern; the first
    /// record that does not is reported with its index.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Value> = serde_json::from_str(json)?;
        let templates = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| parse_record(index, record))
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed catalog with {} templates", templates.len());
        Ok(Self { templates })
    }

    /// Returns the catalog bundled with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Returns the templates in catalog order.
    pub fn templates(&self) -> &[DorkTemplate] {
        &self.templates
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Returns the number of patterns across all templates.
    pub fn pattern_count(&self) -> usize {
        self.templates.iter().map(|t| t.patterns().len()).sum()
    }

    /// Returns a new catalog with the placeholder domain replaced by `target`.
    pub fn with_target(&self, target: &str) -> Self {
        Self {
            templates: self
                .templates
                .iter()
                .map(|t| t.with_target(target))
                .collect(),
        }
    }
}

fn parse_record(index: usize, record: Value) -> Result<DorkTemplate> {
    let malformed = |reason: String| DorkError::MalformedTemplate { index, reason };

    let raw: RawTemplate = serde_json::from_value(record).map_err(|e| malformed(e.to_string()))?;
    let title = raw
        .title
        .ok_or_else(|| malformed("missing field `title`".to_string()))?;
    let dork = raw
        .dork
        .ok_or_else(|| malformed("missing field `dork`".to_string()))?;
    if dork.as_slice().is_empty() {
        return Err(malformed("`dork` has no patterns".to_string()));
    }

    Ok(DorkTemplate { title, dork })
}

/// Replaces every occurrence of the placeholder domain in each pattern.
///
/// `target` is inserted literally.
pub fn apply_target(patterns: &[String], target: &str) -> Vec<String> {
    patterns
        .iter()
        .map(|p| p.replace(PLACEHOLDER_DOMAIN, target))
        .collect()
}

/// Trims user input, falling back to the placeholder domain when empty.
pub fn resolve_target(input: &str) -> &str {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        PLACEHOLDER_DOMAIN
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_target_replaces_every_occurrence() {
        let patterns = vec![
            "site:example.com inurl:admin".to_string(),
            "site:example.com | site:*.example.com".to_string(),
        ];
        let applied = apply_target(&patterns, "acme.org");
        assert_eq!(
            applied,
            vec![
                "site:acme.org inurl:admin".to_string(),
                "site:acme.org | site:*.acme.org".to_string(),
            ]
        );
    }

    #[test]
    fn test_apply_target_is_case_sensitive() {
        let patterns = vec!["site:EXAMPLE.com".to_string()];
        assert_eq!(apply_target(&patterns, "acme.org"), patterns);
    }

    #[test]
    fn test_apply_target_is_literal() {
        let patterns = vec!["site:example.com".to_string()];
        assert_eq!(apply_target(&patterns, "$1.*"), vec!["site:$1.*".to_string()]);
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("  acme.org \n"), "acme.org");
        assert_eq!(resolve_target("   "), PLACEHOLDER_DOMAIN);
        assert_eq!(resolve_target(""), PLACEHOLDER_DOMAIN);
    }

    #[test]
    fn test_catalog_from_json_single_and_many() {
        let json = r#"[
            {"title": "Admin", "dork": "site:example.com inurl:admin"},
            {"title": "Docs", "dork": ["site:example.com filetype:pdf", "site:example.com filetype:doc"]}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.pattern_count(), 3);
        assert_eq!(catalog.templates()[0].patterns(), &["site:example.com inurl:admin".to_string()]);
        assert_eq!(catalog.templates()[1].title, "Docs");
    }

    #[test]
    fn test_catalog_from_json_missing_title() {
        let json = r#"[{"title": "Ok", "dork": "a"}, {"dork": "b"}]"#;
        let err = Catalog::from_json(json).unwrap_err();
        match err {
            DorkError::MalformedTemplate { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("title"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_catalog_from_json_missing_dork() {
        let json = r#"[{"title": "No patterns"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(DorkError::MalformedTemplate { index: 0, .. })
        ));
    }

    #[test]
    fn test_catalog_from_json_empty_pattern_list() {
        let json = r#"[{"title": "Empty", "dork": []}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(DorkError::MalformedTemplate { index: 0, .. })
        ));
    }

    #[test]
    fn test_catalog_from_json_wrong_field_type() {
        let json = r#"[{"title": "Numeric", "dork": 42}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(DorkError::MalformedTemplate { index: 0, .. })
        ));
    }

    #[test]
    fn test_catalog_from_json_not_an_array() {
        assert!(matches!(
            Catalog::from_json(r#"{"title": "x"}"#),
            Err(DorkError::Json(_))
        ));
    }

    #[test]
    fn test_catalog_empty() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.pattern_count(), 0);
    }

    #[test]
    fn test_catalog_with_target_leaves_original_untouched() {
        let catalog = Catalog::new(vec![DorkTemplate::new("Admin", "site:example.com inurl:admin")]);
        let targeted = catalog.with_target("acme.org");
        assert_eq!(targeted.templates()[0].patterns()[0], "site:acme.org inurl:admin");
        assert_eq!(catalog.templates()[0].patterns()[0], "site:example.com inurl:admin");
    }

    #[test]
    fn test_template_with_target_keeps_shape() {
        let template = DorkTemplate::with_patterns(
            "Files",
            vec!["site:example.com ext:sql".to_string(), "site:example.com ext:env".to_string()],
        );
        let targeted = template.with_target("acme.org");
        assert!(matches!(targeted.dork, DorkPatterns::Many(ref p) if p.len() == 2));
        assert_eq!(targeted.patterns()[1], "site:acme.org ext:env");
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for template in catalog.templates() {
            assert!(!template.title.is_empty());
            for pattern in template.patterns() {
                assert!(pattern.contains(PLACEHOLDER_DOMAIN), "{}", pattern);
            }
        }
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let catalog = Catalog::new(vec![DorkTemplate::new("A", "site:example.com")]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"[{"title":"A","dork":"site:example.com"}]"#);
        assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
    }
}
