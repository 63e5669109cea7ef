//! Search result context.
//!
//! Every `search`/`paginate` call returns a [`SearchResults`] bundling the
//! raw hits, the key name of the queried model type, and the handle the
//! query ran on. Key extraction and the total-count accessor live here, so
//! two in-flight searches never share state and neither can be read before
//! a query has actually run.

use std::fmt;

use serde_json::Value;

use xunsearch_engine_shared::Hit;

use crate::errors::EngineError;
use crate::interfaces::SearchHandle;

/// Raw result set of one executed query, plus the context needed to read it.
pub struct SearchResults {
    hits: Vec<Hit>,
    key_name: String,
    handle: Box<dyn SearchHandle>,
}

impl SearchResults {
    pub(crate) fn new(hits: Vec<Hit>, key_name: String, handle: Box<dyn SearchHandle>) -> Self {
        Self {
            hits,
            key_name,
            handle,
        }
    }

    /// The matched records, in backend order.
    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// Number of records in this page of results.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Check whether this page of results is empty.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Primary-key field name of the queried model type.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Primary-key values of the matched records, in result order.
    ///
    /// Hits that do not carry the key field are skipped.
    pub fn ids(&self) -> Vec<Value> {
        self.hits
            .iter()
            .filter_map(|hit| hit.value(&self.key_name).cloned())
            .collect()
    }

    /// Total number of matches before pagination.
    ///
    /// Asks the backend's total-matched accessor for the query that produced
    /// this result set; the held hits are not counted.
    pub async fn total_count(&self) -> Result<u64, EngineError> {
        self.handle.total_matched().await
    }
}

impl fmt::Debug for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchResults")
            .field("hits", &self.hits)
            .field("key_name", &self.key_name)
            .finish()
    }
}
