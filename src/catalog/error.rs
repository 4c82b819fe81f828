use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog has no entries")]
    Empty,

    #[error("Catalog entry id must be positive")]
    ZeroId,

    #[error("Duplicate catalog entry id {id}")]
    DuplicateId { id: u32 },

    #[error("Catalog entry {id} has an empty '{field}' field")]
    EmptyField { id: u32, field: &'static str },

    #[error("Failed to read catalog file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Serializing an entry for navigation failed.
#[derive(Debug, Error)]
#[error("Failed to encode catalog entry: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);

/// A navigation parameter or URL could not be turned back into an entry.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The parameter contains a character that must have been escaped.
    #[error("Unescaped '{0}' in encoded entry")]
    Unescaped(char),

    /// A `%` escape is malformed or decodes to bytes that are not UTF-8.
    #[error("Invalid escaping in encoded entry: {0}")]
    Escape(String),

    /// The unescaped text is not JSON, or not an entry-shaped object.
    #[error("Malformed entry JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON has the right shape but breaks an entry invariant.
    #[error("Invalid entry: {0}")]
    InvalidEntry(#[source] CatalogError),

    /// A navigation URL points at no known route.
    #[error("Unknown route '{0}'")]
    Route(String),
}
