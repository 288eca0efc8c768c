//! Keyword search over a documentation site's topic table.
//!
//! This module provides the record store, query tokenization, the capped
//! AND-matching result builder, and the query-change session that drives it.

// Module declarations
pub(crate) mod keyword_table;
pub(crate) mod query;
pub(crate) mod record;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use keyword_table::{BUNDLED_TABLE, load_keyword_table, parse_keyword_table};
pub use query::{
    DEFAULT_MAX_LIST, SearchOutput, SearchSession, SessionOutput, navigate_target, search,
    search_with,
};
pub use record::{DEFAULT_RECORD_CAP, Record, RecordStore};
pub use scoring::{SUGGESTION_THRESHOLD, Suggestion, suggest_titles};
pub use tokenize::{Term, TermSyntax, matches, tokenize};
