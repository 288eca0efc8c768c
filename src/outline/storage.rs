//! Key/value storage for persisted outline blobs.

use ahash::AHashMap;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where persisted blobs live between sessions.
///
/// Reads that fail for any reason behave like a missing key; writes are
/// best effort.
pub trait StorageAdapter {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Process-local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: AHashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// Storage backed by a single JSON object file mapping keys to blobs.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/docnav-mcp/outline.json`, or a relative path when the
    /// platform has no data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("docnav-mcp")
            .join("outline.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read storage file {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(
                "Ignoring unreadable storage file {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        // Whole-file replace so readers never observe a partial blob
        let staging = self.path.with_extension("json.tmp");
        std::fs::write(&staging, content)?;
        std::fs::rename(&staging, &self.path)
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let value = self.read_entries().remove(key);
        tracing::debug!(
            "Storage read '{}' from {}: {}",
            key,
            self.path.display(),
            if value.is_some() { "hit" } else { "miss" }
        );
        value
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_entries(&entries) {
            tracing::warn!(
                "Failed to write storage file {}: {}",
                self.path.display(),
                e
            );
        }
    }
}
