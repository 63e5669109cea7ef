//! Per-index session registry.
//!
//! Sessions are keyed by index name and opened at most once each: the first
//! operation touching an index builds the configuration text from the
//! model's schema and asks the connector to open a session; every later
//! operation reuses it. The registry is built and owned by the caller and
//! shared by reference, so one registry can serve any number of engines and
//! model types concurrently.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use xunsearch_engine_shared::SearchTarget;

use crate::config::EngineConfig;
use crate::errors::EngineError;
use crate::ini::build_ini;
use crate::interfaces::{BackendConnector, BackendSession};

/// Caller-owned map from index name to live backend session.
pub struct SessionRegistry {
    connector: Arc<dyn BackendConnector>,
    sessions: RwLock<HashMap<String, Arc<dyn BackendSession>>>,
}

impl SessionRegistry {
    /// Create an empty registry around a connector.
    pub fn new(connector: Arc<dyn BackendConnector>) -> Self {
        Self {
            connector,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Return the session for the target's index, opening it if needed.
    ///
    /// Opening is serialized per registry: even under concurrent calls the
    /// connector sees at most one `open` per index name.
    pub async fn get_or_connect(
        &self,
        target: &SearchTarget,
        config: &EngineConfig,
    ) -> Result<Arc<dyn BackendSession>, EngineError> {
        if let Some(session) = self.sessions.read().await.get(&target.index) {
            return Ok(session.clone());
        }

        let mut sessions = self.sessions.write().await;

        // Re-check under the write lock; another task may have connected
        // while we waited.
        if let Some(session) = sessions.get(&target.index) {
            return Ok(session.clone());
        }

        let ini = build_ini(config, &target.index, &target.schema);
        let session = self.connector.open(&ini).await?;

        info!(index = %target.index, "opened backend session");
        sessions.insert(target.index.clone(), session.clone());

        Ok(session)
    }

    /// Pre-seed a session for an index name.
    pub async fn register(&self, index: impl Into<String>, session: Arc<dyn BackendSession>) {
        self.sessions.write().await.insert(index.into(), session);
    }
}
