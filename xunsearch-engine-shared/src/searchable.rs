//! Model-side contracts.
//!
//! Application models implement [`Searchable`] to describe how they are
//! indexed; the engine never sees the models' own types beyond this surface.
//! [`ModelStore`] is the persistence seam used to turn matched keys back
//! into models.

use async_trait::async_trait;
use serde_json::Value;

use crate::document::Document;
use crate::schema::SearchSchema;

/// Contract implemented by every model type that can be indexed and queried.
pub trait Searchable: Send + Sync {
    /// Name of the index (project) this model is stored in.
    fn searchable_index(&self) -> String;

    /// Name of the primary-key field.
    fn key_name(&self) -> &str;

    /// Primary-key value of this instance.
    fn key(&self) -> Value;

    /// The field mapping to index for this instance.
    ///
    /// Returning an empty document excludes the instance from indexing.
    fn to_search_document(&self) -> Document;

    /// Per-field type declarations for this model's index.
    ///
    /// Consulted only when a connection for the index is first opened.
    fn search_schema(&self) -> SearchSchema;
}

/// Snapshot of the parts of a [`Searchable`] the engine needs to route a
/// query or write batch: which index to talk to, which field is the key,
/// and which schema to declare if the connection does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTarget {
    /// Index (project) name.
    pub index: String,
    /// Primary-key field name.
    pub key_name: String,
    /// Field type declarations for the index.
    pub schema: SearchSchema,
}

impl SearchTarget {
    /// Take a target snapshot from a model instance.
    pub fn of(model: &dyn Searchable) -> Self {
        Self {
            index: model.searchable_index(),
            key_name: model.key_name().to_string(),
            schema: model.search_schema(),
        }
    }
}

/// Batched lookup against a model type's persistence layer.
///
/// Used by the engine's `map` operation to resolve matched primary keys back
/// into models. The store returns models in whatever order it likes; the
/// engine does not reorder them to match result order.
#[async_trait]
pub trait ModelStore: Send + Sync {
    /// The model type this store resolves.
    type Model: Searchable;

    /// Error type surfaced by the persistence layer.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the models whose primary keys are in `keys`.
    ///
    /// Keys with no matching model are silently absent from the result.
    async fn find_by_keys(&self, keys: &[Value]) -> Result<Vec<Self::Model>, Self::Error>;
}
