//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for docnav-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the host code.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a keyword table cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The `Keyword = [` array was opened but never closed.
    #[error("keyword table opened at byte {offset} is never closed")]
    UnterminatedTable { offset: usize },
    /// A string literal inside the table runs to the end of input.
    #[error("unterminated string literal in keyword table at byte {offset}")]
    UnterminatedString { offset: usize },
}

/// Error returned by outline operations addressed to a missing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// Node indices are 1-based and bounded by the section count.
    #[error("outline node {index} is out of range (sections 1..={section_count})")]
    IndexOutOfRange { index: usize, section_count: usize },
}
