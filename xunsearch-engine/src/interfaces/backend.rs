//! Backend client trait definitions.
//!
//! These traits model the surface of the Xunsearch client library the engine
//! drives: a connector that opens sessions from generated configuration
//! text, and per-session handles for buffered index writes and query
//! execution. Implementations own the wire protocol, buffering, and timeout
//! behavior; the engine adds nothing on top.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use xunsearch_engine_shared::{Document, Hit};

use crate::errors::EngineError;
use crate::query::SortDirection;

/// Opens backend sessions from configuration text.
///
/// The configuration text is the INI document produced by
/// [`crate::ini::build_ini`]; the connector is responsible for parsing it
/// and establishing connections to the index and search servers it names.
#[async_trait]
pub trait BackendConnector: Send + Sync {
    /// Open a session for the index described by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - INI configuration text naming the project and the index
    ///   and search servers
    ///
    /// # Returns
    ///
    /// * `Ok(session)` - A live session for the described index
    /// * `Err(EngineError::ConnectionError)` - If the configuration is
    ///   malformed or the servers are unreachable
    async fn open(&self, config: &str) -> Result<Arc<dyn BackendSession>, EngineError>;
}

/// A live session against one index.
///
/// Hands out owned, independent handles; two handles from the same session
/// never share query or buffer state.
pub trait BackendSession: Send + Sync {
    /// Obtain a handle for buffered index writes.
    fn index_writer(&self) -> Box<dyn IndexWriter>;

    /// Obtain a handle for query execution.
    fn search_handle(&self) -> Box<dyn SearchHandle>;
}

/// Batched-write surface of the index server.
///
/// Writes issued between `open_buffer` and `close_buffer` are submitted as
/// one batch; `flush` commits the index afterwards.
#[async_trait]
pub trait IndexWriter: Send {
    /// Open the batched-write scope.
    async fn open_buffer(&mut self) -> Result<(), EngineError>;

    /// Submit a document upsert.
    async fn add(&mut self, document: &Document) -> Result<(), EngineError>;

    /// Delete the documents whose primary keys are in `keys`.
    async fn delete_keys(&mut self, keys: &[Value]) -> Result<(), EngineError>;

    /// Close the batched-write scope.
    async fn close_buffer(&mut self) -> Result<(), EngineError>;

    /// Commit pending writes to the index.
    async fn flush(&mut self) -> Result<(), EngineError>;
}

/// Query surface of the search server.
///
/// The setters configure the next `execute` call. Repeated `set_sort` calls
/// accumulate in call order: the first call is the primary sort key.
#[async_trait]
pub trait SearchHandle: Send + Sync {
    /// Enable or disable fuzzy matching.
    fn set_fuzzy(&mut self, fuzzy: bool);

    /// Override the target index (project) for the next query.
    fn set_project(&mut self, project: &str);

    /// Restrict matches to `min <= field <= max` (inclusive on both ends).
    fn add_range(&mut self, field: &str, min: &Value, max: &Value);

    /// Append a sort directive.
    fn set_sort(&mut self, field: &str, direction: SortDirection);

    /// Set the result window for the next query.
    fn set_limit(&mut self, limit: usize, offset: usize);

    /// Execute the query text and return the matched records.
    async fn execute(&mut self, query: &str) -> Result<Vec<Hit>, EngineError>;

    /// Total number of matches before pagination for the most recently
    /// executed query on this handle.
    async fn total_matched(&self) -> Result<u64, EngineError>;
}
