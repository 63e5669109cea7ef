//! Error types for the Xunsearch engine.

use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// The taxonomy is inherited from the collaborators: the engine performs no
/// recovery, so connection, write, and query failures surface to the caller
/// unmodified in message form.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// Failed to open or use a backend session.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Invalid or unusable engine configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failed to write to the index.
    #[error("Index error: {0}")]
    IndexError(String),

    /// Search query execution failed.
    #[error("Query error: {0}")]
    QueryError(String),

    /// The model persistence layer failed during a lookup.
    #[error("Model store error: {0}")]
    StoreError(String),
}

impl EngineError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create an index error.
    pub fn index(msg: impl Into<String>) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a query error.
    pub fn query(msg: impl Into<String>) -> Self {
        Self::QueryError(msg.into())
    }

    /// Create a model store error.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::StoreError(msg.into())
    }
}
