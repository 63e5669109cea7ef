//! Engine configuration.

use std::env;

/// Default index-server address.
const DEFAULT_INDEX_SERVER: &str = "localhost:8383";

/// Default search-server address.
const DEFAULT_SEARCH_SERVER: &str = "localhost:8384";

/// Default number of results per page.
const DEFAULT_PER_PAGE: usize = 15;

/// Connection and behavior settings for the engine.
///
/// The server addresses are serialized verbatim into the configuration text
/// handed to the backend connector; any timeout behavior is the backend's to
/// enforce through these connections.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Index-server address (`host:port`).
    pub index_server: String,
    /// Search-server address (`host:port`).
    pub search_server: String,
    /// Whether fuzzy matching is enabled for translated queries.
    pub fuzzy: bool,
    /// Result limit applied when a query does not specify one.
    pub per_page: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            index_server: DEFAULT_INDEX_SERVER.to_string(),
            search_server: DEFAULT_SEARCH_SERVER.to_string(),
            fuzzy: false,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl EngineConfig {
    /// Build a configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XUNSEARCH_INDEX_SERVER`: index-server address (default: localhost:8383)
    /// - `XUNSEARCH_SEARCH_SERVER`: search-server address (default: localhost:8384)
    /// - `XUNSEARCH_FUZZY`: "true"/"1" to enable fuzzy matching (default: off)
    pub fn from_env() -> Self {
        let index_server = env::var("XUNSEARCH_INDEX_SERVER")
            .unwrap_or_else(|_| DEFAULT_INDEX_SERVER.to_string());
        let search_server = env::var("XUNSEARCH_SEARCH_SERVER")
            .unwrap_or_else(|_| DEFAULT_SEARCH_SERVER.to_string());
        let fuzzy = env::var("XUNSEARCH_FUZZY")
            .map(|value| value == "true" || value == "1")
            .unwrap_or(false);

        Self {
            index_server,
            search_server,
            fuzzy,
            ..Self::default()
        }
    }

    /// Set the fuzzy-matching flag.
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Set the default per-page result limit.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }
}
