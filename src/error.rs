//! Error types for the content-hashed asset index.

use thiserror::Error;

/// Store access errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Is a directory: {0}")]
    IsADirectory(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Store I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a custom hasher or renamer.
///
/// The built-in strategies never return this for well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StrategyError {
    message: String,
}

impl StrategyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Indexing errors. Any of these aborts construction of the index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Store access failed: {0}")]
    Store(#[from] StoreError),

    #[error("Hasher failed for {path}: {source}")]
    Hasher {
        path: String,
        #[source]
        source: StrategyError,
    },

    #[error("Renamer failed for {path}: {source}")]
    Renamer {
        path: String,
        #[source]
        source: StrategyError,
    },
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
