//! # Xunsearch Engine
//!
//! This crate bridges the searchable-model abstraction from
//! `xunsearch-engine-shared` to the Xunsearch full-text search server. It
//! translates model batches into buffered index writes, query descriptors
//! into the backend's query calls, and raw result sets back into model
//! primary keys. The backend client itself is a trait contract
//! ([`interfaces`]); the inverted index, tokenizer, ranking, and wire
//! protocol all live behind it.

pub mod config;
pub mod engine;
pub mod errors;
pub mod ini;
pub mod interfaces;
pub mod query;
pub mod registry;
pub mod results;

pub use config::EngineConfig;
pub use engine::XunsearchEngine;
pub use errors::EngineError;
pub use interfaces::{BackendConnector, BackendSession, IndexWriter, SearchHandle};
pub use query::{RawQueryCallback, RawQueryFuture, SearchOptions, SearchQuery, SortDirection, SortDirective};
pub use registry::SessionRegistry;
pub use results::SearchResults;
