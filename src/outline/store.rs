//! Outline state bound to its persisted blob.

use super::state::{self, OutlineState};
use super::storage::StorageAdapter;

/// Outline state together with the storage slot it is persisted to.
#[derive(Debug)]
pub struct OutlineStore<S> {
    state: OutlineState,
    storage: S,
    key: String,
}

impl<S: StorageAdapter> OutlineStore<S> {
    /// Loads the state stored under `key`, falling back to the default
    /// pattern when it is missing or was written for another section count.
    pub fn open(storage: S, key: impl Into<String>, section_count: usize) -> Self {
        let key = key.into();
        let persisted = storage.get(&key);
        let state = state::load(persisted.as_deref(), section_count);
        tracing::debug!(
            "Opened outline '{}' with {} sections: {}",
            key,
            section_count,
            state::save(&state)
        );
        Self {
            state,
            storage,
            key,
        }
    }

    pub fn state(&self) -> &OutlineState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut OutlineState {
        &mut self.state
    }

    /// Writes the full vector. There is no partial write path.
    pub fn persist(&mut self) {
        let blob = state::save(&self.state);
        self.storage.set(&self.key, &blob);
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
