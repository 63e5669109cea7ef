//! Query descriptor types.
//!
//! A [`SearchQuery`] is a transient value object created per search call: it
//! captures the query text, the target model's index and key name, equality
//! filters, sort directives, an optional result limit, and an optional
//! raw-escape callback that bypasses translation entirely.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use xunsearch_engine_shared::{Hit, SearchTarget, Searchable};

use crate::errors::EngineError;
use crate::interfaces::SearchHandle;

/// Sort order for one directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// The lowercase token backends use for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One sort instruction: a field and a direction.
///
/// Directives are applied in declaration order; the first is the primary
/// sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// Field to sort by.
    pub field: String,
    /// Sort order.
    pub direction: SortDirection,
}

/// Pagination options supplied internally by `paginate`.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Zero-based page index; `Some(page)` makes the offset `page * limit`.
    pub page: Option<usize>,
}

/// Future returned by a raw-escape callback.
pub type RawQueryFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<Hit>, EngineError>> + Send + 'a>>;

/// Escape hatch for queries the translation layer cannot express.
///
/// The callback receives the search handle, the query text, and the options,
/// and drives the handle directly; the engine performs no translation around
/// it and passes its hits through unmodified.
pub type RawQueryCallback = Arc<
    dyn for<'a> Fn(&'a mut dyn SearchHandle, &'a str, &'a SearchOptions) -> RawQueryFuture<'a>
        + Send
        + Sync,
>;

/// Transient descriptor for one search, discarded after the call.
#[derive(Clone)]
pub struct SearchQuery {
    /// Query text to execute.
    pub query: String,
    /// Which model type's index and key name the query applies to.
    pub target: SearchTarget,
    /// Index (project) name override.
    pub project: Option<String>,
    /// Equality filters in declaration order.
    pub wheres: Vec<(String, Value)>,
    /// Sort directives in declaration order.
    pub orders: Vec<SortDirective>,
    /// Result limit; unset or zero falls back to the configured page size.
    pub limit: Option<usize>,
    /// Raw-escape callback bypassing all translation.
    pub callback: Option<RawQueryCallback>,
}

impl SearchQuery {
    /// Create a descriptor for a target and query text.
    pub fn new(target: SearchTarget, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            target,
            project: None,
            wheres: Vec::new(),
            orders: Vec::new(),
            limit: None,
            callback: None,
        }
    }

    /// Create a descriptor targeting the given model's index.
    pub fn for_model(model: &dyn Searchable, query: impl Into<String>) -> Self {
        Self::new(SearchTarget::of(model), query)
    }

    /// Override the index (project) name for this query.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Add an exact-match filter on a field.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.wheres.push((field.into(), value.into()));
        self
    }

    /// Append a sort directive.
    pub fn order_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.orders.push(SortDirective {
            field: field.into(),
            direction,
        });
        self
    }

    /// Set the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Attach a raw-escape callback.
    pub fn with_raw_query<F>(mut self, callback: F) -> Self
    where
        F: for<'a> Fn(&'a mut dyn SearchHandle, &'a str, &'a SearchOptions) -> RawQueryFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchQuery")
            .field("query", &self.query)
            .field("target", &self.target)
            .field("project", &self.project)
            .field("wheres", &self.wheres)
            .field("orders", &self.orders)
            .field("limit", &self.limit)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use xunsearch_engine_shared::SearchSchema;

    fn target() -> SearchTarget {
        SearchTarget {
            index: "posts".to_string(),
            key_name: "id".to_string(),
            schema: SearchSchema::new(),
        }
    }

    #[test]
    fn test_builder_accumulates_in_order() {
        let query = SearchQuery::new(target(), "rust")
            .filter("status", "active")
            .filter("category", 3)
            .order_by("created_at", SortDirection::Desc)
            .order_by("id", SortDirection::Asc)
            .with_limit(25);

        assert_eq!(query.query, "rust");
        assert_eq!(
            query.wheres,
            vec![
                ("status".to_string(), json!("active")),
                ("category".to_string(), json!(3)),
            ]
        );
        assert_eq!(query.orders[0].field, "created_at");
        assert_eq!(query.orders[0].direction, SortDirection::Desc);
        assert_eq!(query.orders[1].field, "id");
        assert_eq!(query.limit, Some(25));
        assert!(query.callback.is_none());
    }

    #[test]
    fn test_debug_reports_callback_presence() {
        let query = SearchQuery::new(target(), "q")
            .with_raw_query(|_handle, _query, _options| Box::pin(async { Ok(Vec::new()) }));

        let rendered = format!("{:?}", query);
        assert!(rendered.contains("callback: true"));
    }
}
