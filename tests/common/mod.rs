#![allow(dead_code)]

//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_store`: the two-topic store used by the search scenarios
//! - `bundled_store`: the bundled keyword table, uncapped
//! - `nav_state`: host state over the bundled table with in-memory storage
//!
//! [`TempWorkspace`] provides a temp directory for tests that exercise
//! file-backed storage or keyword table files.

use docnav_mcp::config::Config;
use docnav_mcp::outline::MemoryStorage;
use docnav_mcp::search::{BUNDLED_TABLE, RecordStore, parse_keyword_table};
use docnav_mcp::state::NavState;
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory for test isolation, removed when dropped.
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }

    /// Reads a file from this workspace.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.root.join(path))
            .unwrap_or_else(|e| panic!("Failed to read file '{}': {}", path, e))
    }
}

/// The store from the search scenarios: ALPHA then BETA.
#[fixture]
pub fn sample_store() -> RecordStore {
    RecordStore::init(["Alpha alpha desc foo", "Beta beta desc bar"], 100)
}

/// Every entry of the bundled keyword table.
#[fixture]
pub fn bundled_store() -> RecordStore {
    let entries = parse_keyword_table(BUNDLED_TABLE).expect("bundled table parses");
    RecordStore::init(entries, usize::MAX)
}

/// Host state over the bundled table with a five-section in-memory outline.
#[fixture]
pub fn nav_state() -> NavState {
    docnav_mcp::tracing::init();

    let mut config = Config::default();
    config.outline.section_count = Some(5);

    let entries = parse_keyword_table(BUNDLED_TABLE).expect("bundled table parses");
    let store = RecordStore::init(entries, config.search.record_cap);
    NavState::new(config, store, Box::new(MemoryStorage::new()))
}
