//! Shared state for the MCP host.
//!
//! The record store is immutable after startup and shared freely. The search
//! session and the outline controller each sit behind a mutex, so every tool
//! call runs as one complete event against them.

use crate::config::Config;
use crate::outline::{
    FileStorage, IndicatorView, OutlineStore, StorageAdapter, ToggleController, VecRegistry,
};
use crate::search::{BUNDLED_TABLE, RecordStore, SearchSession, load_keyword_table, parse_keyword_table};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Storage handle the host persists the outline through.
pub type DynStorage = Box<dyn StorageAdapter + Send>;

/// Outline controller as driven by the host.
pub type OutlineController = ToggleController<DynStorage, VecRegistry<IndicatorView>>;

/// Search corpus, query session, and outline for one running server.
pub struct NavState {
    config: Config,
    store: Arc<RecordStore>,
    session: Mutex<SearchSession>,
    outline: Mutex<OutlineController>,
}

impl std::fmt::Debug for NavState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavState")
            .field("records", &self.store.len())
            .field("max_list", &self.config.search.max_list)
            .field("storage_key", &self.config.outline.storage_key)
            .finish()
    }
}

impl NavState {
    /// Builds state from configuration: loads the keyword table and opens the
    /// outline from file storage.
    pub fn from_config(config: Config) -> Result<Self> {
        let entries = match &config.search.keyword_table {
            Some(path) => load_keyword_table(path)?,
            None => parse_keyword_table(BUNDLED_TABLE).context("Bundled keyword table is invalid")?,
        };
        let store = RecordStore::init(entries, config.search.record_cap);

        let storage_path = config.outline.storage_path();
        tracing::info!("Persisting outline state to {}", storage_path.display());
        let storage: DynStorage = Box::new(FileStorage::new(storage_path));

        Ok(Self::new(config, store, storage))
    }

    /// Builds state from an already-initialized store and storage backend.
    pub fn new(config: Config, store: RecordStore, storage: DynStorage) -> Self {
        let section_count = config.outline.section_count.unwrap_or(store.len());
        let outline = OutlineStore::open(storage, config.outline.storage_key.clone(), section_count);
        let controller = ToggleController::new(outline, VecRegistry::with_defaults(section_count));
        let session = SearchSession::new(config.search.max_list, config.search.term_syntax);

        tracing::info!(
            "Indexed {} topics, outline has {} sections",
            store.len(),
            section_count
        );

        Self {
            config,
            store: Arc::new(store),
            session: Mutex::new(session),
            outline: Mutex::new(controller),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<RecordStore> {
        &self.store
    }

    pub fn session(&self) -> &Mutex<SearchSession> {
        &self.session
    }

    pub fn outline(&self) -> &Mutex<OutlineController> {
        &self.outline
    }
}
