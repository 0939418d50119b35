//! Error types for Shelf Core

use thiserror::Error;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for all Shelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("View was dropped before it settled")]
    ViewClosed,
}

/// Errors that occur while fetching the book list
///
/// These never escape the load controller: they end up in [`crate::ViewState::error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The fetch itself was rejected (connection, HTTP status, I/O)
    #[error("Network error: {0}")]
    Network(String),

    /// The body is not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// The JSON is missing the `books` field or a record is malformed
    #[error("Shape error: {0}")]
    Shape(String),
}

/// Errors that occur while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
