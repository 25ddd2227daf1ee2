//! Cross-engine query translation.
//!
//! Every template is authored in the canonical (Google) dialect. A [`Dialect`]
//! rewrites a canonical query into the syntax its destination engine accepts.
//! Translation is total: tokens a dialect does not know about pass through
//! unchanged.
//!
//! The result is a well-formed query for the target engine, but result sets are
//! only approximately equivalent. DuckDuckGo in particular has no URL filter,
//! so `inurl:` degrades to an exact-phrase match.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of the URL-substring filter.
const INURL: &str = "inurl:";
/// Prefix of the title filter.
const INTITLE: &str = "intitle:";
/// Prefix of the domain restriction.
const SITE: &str = "site:";

/// A whitespace-delimited token of a canonical query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `-<term>`: exclude results containing the term.
    Exclude(&'a str),
    /// `inurl:<term>`: the URL must contain the term.
    InUrl(&'a str),
    /// `intitle:<term>`: the page title must contain the term.
    InTitle(&'a str),
    /// `site:<domain>`: restrict results to a domain.
    Site(&'a str),
    /// `|`: OR connector.
    Or,
    /// Anything else, including operators the translator does not rewrite.
    Term(&'a str),
}

impl<'a> Token<'a> {
    /// Classifies a single token.
    ///
    /// Operator prefixes are checked before the exclusion prefix, so
    /// `-inurl:admin` is an exclusion of the term `inurl:admin`.
    pub fn classify(raw: &'a str) -> Self {
        if raw == "|" {
            Token::Or
        } else if let Some(rest) = raw.strip_prefix(INURL) {
            Token::InUrl(rest)
        } else if let Some(rest) = raw.strip_prefix(INTITLE) {
            Token::InTitle(rest)
        } else if let Some(rest) = raw.strip_prefix(SITE) {
            Token::Site(rest)
        } else if let Some(rest) = raw.strip_prefix('-') {
            Token::Exclude(rest)
        } else {
            Token::Term(raw)
        }
    }

    /// Short label for the token shape.
    pub fn kind(&self) -> &'static str {
        match self {
            Token::Exclude(_) => "exclude",
            Token::InUrl(_) => "inurl",
            Token::InTitle(_) => "intitle",
            Token::Site(_) => "site",
            Token::Or => "or",
            Token::Term(_) => "term",
        }
    }

    /// The operand of the token, empty for connectors.
    pub fn value(&self) -> &'a str {
        match *self {
            Token::Exclude(v)
            | Token::InUrl(v)
            | Token::InTitle(v)
            | Token::Site(v)
            | Token::Term(v) => v,
            Token::Or => "",
        }
    }
}

/// Splits a query on runs of whitespace and classifies each token.
pub fn tokenize(query: &str) -> impl Iterator<Item = Token<'_>> {
    query.split_whitespace().map(Token::classify)
}

/// Query dialect of a search engine.
///
/// This is the translation rule attached to every registered engine. The set
/// is closed; engines without a dedicated rule use [`Dialect::Google`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Canonical dialect. Queries pass through unchanged.
    #[default]
    Google,
    /// `NOT` instead of a leading minus, `OR` instead of `|`.
    Bing,
    /// No `inurl:` filter; negations and URL filters become quoted phrases.
    DuckDuckGo,
}

impl Dialect {
    /// Lowercase name of the dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Google => "google",
            Dialect::Bing => "bing",
            Dialect::DuckDuckGo => "duckduckgo",
        }
    }

    /// Rewrites a canonical query into this dialect.
    ///
    /// Applying a non-identity rule twice is not the same as applying it once.
    pub fn translate(&self, query: &str) -> String {
        match self {
            Dialect::Google => query.to_string(),
            Dialect::Bing => rewrite_bing(query),
            Dialect::DuckDuckGo => rewrite_duckduckgo(query),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn rewrite_bing(query: &str) -> String {
    let negated = query.replace(" -", " NOT ");
    // A minus at the very start has no preceding space.
    let negated = match negated.strip_prefix('-') {
        Some(rest) => format!("NOT {}", rest),
        None => negated,
    };
    negated.replace('|', " OR ")
}

fn rewrite_duckduckgo(query: &str) -> String {
    let tokens: Vec<String> = query
        .split_whitespace()
        .map(|raw| match Token::classify(raw) {
            Token::InUrl(rest) => format!("\"{}\"", rest),
            Token::Exclude(rest) => format!("-\"{}\"", rest),
            _ => raw.to_string(),
        })
        .collect();
    tokens.join(" ").replace('|', " OR ")
}
