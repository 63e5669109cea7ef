//! Document and result-record types.
//!
//! A [`Document`] is the field-name to value mapping submitted to the index
//! writer; a [`Hit`] is one record returned by a search, carrying the stored
//! fields plus the backend's relevance score.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A field-name to value mapping exchanged with the search backend.
///
/// Wraps a `serde_json` object so field values can be strings, numbers, or
/// whatever else the backend accepts. An empty document submitted for a model
/// means the model is skipped entirely by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Set a field value, replacing any previous value for that field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Read a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Check whether a field is present.
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Check whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields in the document.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the fields.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consume the document and return the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One record in a raw search result set.
///
/// Exposes the stored fields by name plus the relevance score the backend
/// assigned to the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Stored fields of the matched document.
    pub fields: Document,
    /// Relevance score assigned by the backend.
    pub score: f32,
}

impl Hit {
    /// Create a hit with a zero score.
    pub fn new(fields: Document) -> Self {
        Self { fields, score: 0.0 }
    }

    /// Set the relevance score.
    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Read a stored field by name.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}
