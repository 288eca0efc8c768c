//! Configuration file support.

use crate::outline::FileStorage;
use crate::search::{DEFAULT_MAX_LIST, DEFAULT_RECORD_CAP, TermSyntax};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DOCNAV_CONFIG";

/// Application configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub search: SearchConfig,
    pub outline: OutlineConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Maximum number of results per query
    pub max_list: usize,
    /// Maximum number of keyword table entries indexed
    pub record_cap: usize,
    /// Appended to the primary choice to form the navigation target
    pub page_suffix: String,
    pub term_syntax: TermSyntax,
    /// Keyword table file; the bundled table is used when unset
    pub keyword_table: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_list: DEFAULT_MAX_LIST,
            record_cap: DEFAULT_RECORD_CAP,
            page_suffix: ".htm".to_string(),
            term_syntax: TermSyntax::default(),
            keyword_table: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    /// Number of outline nodes; defaults to the number of indexed topics
    pub section_count: Option<usize>,
    /// Key the outline blob is stored under
    pub storage_key: String,
    /// Storage file; `<data_dir>/docnav-mcp/outline.json` when unset
    pub storage_path: Option<PathBuf>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            section_count: None,
            storage_key: "outline-open".to_string(),
            storage_path: None,
        }
    }
}

impl OutlineConfig {
    /// Resolve the storage file, with the configured path taking precedence.
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(FileStorage::default_path)
    }
}

impl Config {
    /// Load configuration from `$DOCNAV_CONFIG` or the default location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file. A missing file yields defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/docnav-mcp/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("docnav-mcp")
            .join("config.toml")
    }
}
