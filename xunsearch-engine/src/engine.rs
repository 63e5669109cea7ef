//! Engine implementation.
//!
//! [`XunsearchEngine`] is the translation layer between searchable models
//! and the backend trait surface: model batches become buffered index
//! writes, query descriptors become backend query calls, and raw result
//! sets are mapped back to models through their persistence layer. The
//! engine holds no per-request state; every search returns its own
//! [`SearchResults`] context.

use std::sync::Arc;

use tracing::{debug, instrument};

use xunsearch_engine_shared::{ModelStore, SearchTarget, Searchable};

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::query::{SearchOptions, SearchQuery};
use crate::registry::SessionRegistry;
use crate::results::SearchResults;

/// Driver bridging searchable models to the Xunsearch backend.
///
/// One engine instance can serve any number of model types and concurrent
/// requests; sessions are resolved per index through the shared
/// [`SessionRegistry`].
pub struct XunsearchEngine {
    config: EngineConfig,
    registry: Arc<SessionRegistry>,
}

impl XunsearchEngine {
    /// Create an engine over a caller-owned session registry.
    pub fn new(config: EngineConfig, registry: Arc<SessionRegistry>) -> Self {
        Self { config, registry }
    }

    /// Create an engine with a private registry around the given connector.
    pub fn with_connector(
        config: EngineConfig,
        connector: Arc<dyn crate::interfaces::BackendConnector>,
    ) -> Self {
        Self::new(config, Arc::new(SessionRegistry::new(connector)))
    }

    /// Index a batch of models.
    ///
    /// Writes happen inside one batched-write scope and are committed with a
    /// single flush. A model whose search document is empty is skipped
    /// entirely; every submitted document carries the model's primary-key
    /// field (a model-supplied value for that field wins over the merge).
    /// An empty batch is a no-op. Backend errors propagate unmodified.
    #[instrument(skip(self, models), fields(count = models.len()))]
    pub async fn update<M: Searchable>(&self, models: &[M]) -> Result<(), EngineError> {
        let first = match models.first() {
            Some(first) => first,
            None => return Ok(()),
        };

        let target = SearchTarget::of(first);
        let session = self.registry.get_or_connect(&target, &self.config).await?;

        let mut writer = session.index_writer();
        writer.open_buffer().await?;

        let mut submitted = 0;
        let mut skipped = 0;

        for model in models {
            let mut document = model.to_search_document();

            if document.is_empty() {
                skipped += 1;
                continue;
            }

            if !document.contains_key(model.key_name()) {
                document.insert(model.key_name(), model.key());
            }

            writer.add(&document).await?;
            submitted += 1;
        }

        writer.close_buffer().await?;
        writer.flush().await?;

        debug!(submitted, skipped, index = %target.index, "indexed model batch");
        Ok(())
    }

    /// Remove a batch of models from the index.
    ///
    /// Submits one delete for exactly the batch's primary-key values, then
    /// commits. An empty batch is a no-op.
    #[instrument(skip(self, models), fields(count = models.len()))]
    pub async fn delete<M: Searchable>(&self, models: &[M]) -> Result<(), EngineError> {
        let first = match models.first() {
            Some(first) => first,
            None => return Ok(()),
        };

        let target = SearchTarget::of(first);
        let session = self.registry.get_or_connect(&target, &self.config).await?;

        let keys: Vec<_> = models.iter().map(|model| model.key()).collect();

        let mut writer = session.index_writer();
        writer.delete_keys(&keys).await?;
        writer.flush().await?;

        debug!(deleted = keys.len(), index = %target.index, "deleted model batch");
        Ok(())
    }

    /// Execute a query and return its result context.
    #[instrument(skip(self, query), fields(index = %query.target.index))]
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults, EngineError> {
        self.perform_search(query, SearchOptions::default()).await
    }

    /// Execute a query for one result page.
    ///
    /// Forces the result limit to `per_page`. `page` is 1-based: page 1 maps
    /// to offset 0, page 3 with `per_page` 10 to offset 20. Page 0 is
    /// clamped to the first page.
    #[instrument(skip(self, query), fields(index = %query.target.index, per_page, page))]
    pub async fn paginate(
        &self,
        query: &SearchQuery,
        per_page: usize,
        page: usize,
    ) -> Result<SearchResults, EngineError> {
        let mut query = query.clone();
        query.limit = Some(per_page);

        let options = SearchOptions {
            page: Some(page.saturating_sub(1)),
        };

        self.perform_search(&query, options).await
    }

    /// Translate and execute one query descriptor.
    ///
    /// When the descriptor carries a raw-escape callback, the callback is
    /// invoked exactly once with the search handle, the query text, and the
    /// options, and its hits pass through untouched; no other translation
    /// happens. Otherwise: the configured fuzzy flag is applied, then the
    /// project override if present, then each equality filter as an
    /// inclusive range with `min = max = value` (the backend has no
    /// dedicated exact-match filter; this deliberately supports only exact
    /// matching, never negation or partial matches), then each sort
    /// directive in declaration order, then the result window.
    async fn perform_search(
        &self,
        query: &SearchQuery,
        options: SearchOptions,
    ) -> Result<SearchResults, EngineError> {
        let session = self
            .registry
            .get_or_connect(&query.target, &self.config)
            .await?;

        let mut handle = session.search_handle();

        if let Some(callback) = &query.callback {
            let hits = callback(handle.as_mut(), &query.query, &options).await?;
            return Ok(SearchResults::new(
                hits,
                query.target.key_name.clone(),
                handle,
            ));
        }

        handle.set_fuzzy(self.config.fuzzy);

        if let Some(project) = &query.project {
            handle.set_project(project);
        }

        for (field, value) in &query.wheres {
            handle.add_range(field, value, value);
        }

        for order in &query.orders {
            handle.set_sort(&order.field, order.direction);
        }

        let limit = match query.limit {
            Some(limit) if limit > 0 => limit,
            _ => self.config.per_page,
        };
        let offset = options.page.map_or(0, |page| page * limit);
        handle.set_limit(limit, offset);

        let hits = handle.execute(&query.query).await?;

        Ok(SearchResults::new(
            hits,
            query.target.key_name.clone(),
            handle,
        ))
    }

    /// Resolve matched primary keys back into models.
    ///
    /// Performs one batched store lookup for exactly the keys in `results`.
    /// The returned order is whatever the store produces; it is not
    /// reordered to match result order. No keys means no store call.
    pub async fn map<S: ModelStore>(
        &self,
        results: &SearchResults,
        store: &S,
    ) -> Result<Vec<S::Model>, EngineError> {
        let keys = results.ids();

        if keys.is_empty() {
            return Ok(Vec::new());
        }

        store
            .find_by_keys(&keys)
            .await
            .map_err(|e| EngineError::store(e.to_string()))
    }
}
