//! Per-field schema declarations.
//!
//! A model's searchable schema maps each field name to the type the backend
//! should declare for it. The schema is consumed once, when the connection
//! for the model's index is first opened; no validation happens here beyond
//! what the backend performs on load.

use serde::{Deserialize, Serialize};

/// Field types the backend understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Primary-key field. Exactly one per schema.
    Id,
    /// Plain string field, indexed but not weighted.
    String,
    /// Title field, indexed with higher weight.
    Title,
    /// Body field, the main indexed content.
    Body,
    /// Numeric field, usable in range filters and sorts.
    Numeric,
    /// Date field.
    Date,
}

impl FieldType {
    /// The lowercase token used in generated configuration text.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Id => "id",
            FieldType::String => "string",
            FieldType::Title => "title",
            FieldType::Body => "body",
            FieldType::Numeric => "numeric",
            FieldType::Date => "date",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field declaration in a searchable schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name as stored in the index.
    pub name: String,
    /// Declared backend type for the field.
    pub field_type: FieldType,
}

/// Ordered set of field declarations for one model type.
///
/// Declaration order is preserved into the generated configuration text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSchema {
    fields: Vec<SchemaField>,
}

impl SearchSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field declaration.
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            field_type,
        });
        self
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Look up a field's declared type by name.
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.field_type)
    }

    /// Check whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_tokens() {
        assert_eq!(FieldType::Id.as_str(), "id");
        assert_eq!(FieldType::String.as_str(), "string");
        assert_eq!(FieldType::Title.as_str(), "title");
        assert_eq!(FieldType::Body.as_str(), "body");
        assert_eq!(FieldType::Numeric.as_str(), "numeric");
        assert_eq!(FieldType::Date.as_str(), "date");
    }

    #[test]
    fn test_schema_preserves_declaration_order() {
        let schema = SearchSchema::new()
            .with_field("id", FieldType::Id)
            .with_field("title", FieldType::Title)
            .with_field("body", FieldType::Body);

        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "title", "body"]);
    }

    #[test]
    fn test_schema_get() {
        let schema = SearchSchema::new()
            .with_field("id", FieldType::Id)
            .with_field("views", FieldType::Numeric);

        assert_eq!(schema.get("views"), Some(FieldType::Numeric));
        assert!(schema.get("missing").is_none());
        assert_eq!(schema.len(), 2);
        assert!(!schema.is_empty());
    }
}
