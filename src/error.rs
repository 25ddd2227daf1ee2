//! Error types for the dork library.

use thiserror::Error;

/// Result type alias for dork operations.
pub type Result<T> = std::result::Result<T, DorkError>;

/// Errors that can occur while loading, translating or rendering dorks.
#[derive(Error, Debug)]
pub enum DorkError {
    /// Engine identifier is not present in the registry.
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    /// Engine configuration was rejected at registration.
    #[error("Invalid engine: {0}")]
    InvalidEngine(String),

    /// Catalog record is missing required fields.
    #[error("Malformed template at index {index}: {reason}")]
    MalformedTemplate { index: usize, reason: String },

    /// JSON decoding failed.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Debouncer no longer accepts input.
    #[error("Debouncer is closed")]
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_engine() {
        let err = DorkError::UnknownEngine("altavista".to_string());
        assert_eq!(err.to_string(), "Unknown engine: altavista");
    }

    #[test]
    fn test_error_display_invalid_engine() {
        let err = DorkError::InvalidEngine("missing {query} placeholder".to_string());
        assert_eq!(err.to_string(), "Invalid engine: missing {query} placeholder");
    }

    #[test]
    fn test_error_display_malformed_template() {
        let err = DorkError::MalformedTemplate {
            index: 3,
            reason: "missing field `title`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed template at index 3: missing field `title`"
        );
    }

    #[test]
    fn test_error_display_closed() {
        assert_eq!(DorkError::Closed.to_string(), "Debouncer is closed");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: DorkError = json_err.into();
        assert!(matches!(err, DorkError::Json(_)));
        assert!(err.to_string().starts_with("Failed to parse JSON"));
    }

    #[test]
    fn test_error_from_url_parse() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: DorkError = parse_err.into();
        assert!(matches!(err, DorkError::UrlParse(_)));
    }

    #[test]
    fn test_error_debug() {
        let err = DorkError::Closed;
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Closed"));
    }
}
