//! Error types shared by the collection importer and the release scout

use thiserror::Error;

/// Unified error type for tracker sync operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response or cache file
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Remote call answered with a non-success status
    #[error("HTTP error {status} for request: {request}")]
    HttpStatus {
        status: reqwest::StatusCode,
        request: String,
    },
    /// Board or list lookup by name failed
    #[error("No {kind} named '{name}'")]
    NotFound { kind: &'static str, name: String },
    /// Canonical card string without the `" ("` / `" - "` markers
    #[error("Malformed card string: '{0}'")]
    MalformedCard(String),
    /// Export row that cannot be read with the selected layout
    #[error("Malformed row on line {line} ({reason}): '{content}'")]
    MalformedRow {
        line: usize,
        content: String,
        reason: String,
    },
    /// Rarity label not present in the rarity vocabulary
    #[error("Unknown rarity: '{0}'")]
    UnknownRarity(String),
    /// Date that does not match the expected format
    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl Error {
    pub(crate) fn not_found(kind: &'static str, name: &str) -> Self {
        Error::NotFound {
            kind,
            name: name.to_string(),
        }
    }
}

/// Result alias for tracker sync operations
pub type Result<T> = std::result::Result<T, Error>;
