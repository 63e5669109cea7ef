//! # Xunsearch Engine Shared
//!
//! Shared contracts and value types for the Xunsearch engine driver.
//! This crate defines the model-side surface: the documents and result
//! records exchanged with the backend, the per-field schema declarations,
//! and the traits application models implement to become searchable.

pub mod document;
pub mod schema;
pub mod searchable;

pub use document::{Document, Hit};
pub use schema::{FieldType, SchemaField, SearchSchema};
pub use searchable::{ModelStore, SearchTarget, Searchable};
