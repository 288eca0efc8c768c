//! Keyword table parsing.
//!
//! Generated documentation sites ship their search corpus as a script array:
//!
//! ```text
//! Keyword =
//! [
//! "Exp  The Exponential Function   inverse log",
//! "Log  The Logarithm Function   inverse exp"
//! ]
//! ```
//!
//! Each string is one raw entry: the topic name followed by its title and
//! keywords. Plain text with one entry per line is accepted as well.

use crate::error::LoadError;
use anyhow::Context;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Keyword table bundled with the crate, used when none is configured.
pub const BUNDLED_TABLE: &str = include_str!("../../data/keywords.js");

static TABLE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bKeyword\s*=\s*\[").expect("valid table regex"));

/// Either a complete string literal or the closing bracket of the array.
static TABLE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)"|\]"#).expect("valid token regex"));

/// Parses keyword table source into raw entries, in table order.
pub fn parse_keyword_table(source: &str) -> Result<Vec<String>, LoadError> {
    let Some(start) = TABLE_START.find(source) else {
        return Ok(source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect());
    };

    let body = &source[start.end()..];
    let mut entries = Vec::new();
    let mut cursor = 0;

    for token in TABLE_TOKEN.captures_iter(body) {
        let whole = token.get(0).expect("group 0 always present");

        if let Some(quote) = body[cursor..whole.start()].find('"') {
            return Err(LoadError::UnterminatedString {
                offset: start.end() + cursor + quote,
            });
        }
        cursor = whole.end();

        match token.get(1) {
            Some(literal) => entries.push(unescape(literal.as_str())),
            None => return Ok(entries),
        }
    }

    if let Some(quote) = body[cursor..].find('"') {
        return Err(LoadError::UnterminatedString {
            offset: start.end() + cursor + quote,
        });
    }
    Err(LoadError::UnterminatedTable {
        offset: start.start(),
    })
}

/// Reads and parses a keyword table file.
pub fn load_keyword_table(path: &Path) -> crate::error::Result<Vec<String>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keyword table {}", path.display()))?;
    let entries = parse_keyword_table(&source)
        .with_context(|| format!("Failed to parse keyword table {}", path.display()))?;
    tracing::debug!("Loaded {} keyword entries from {}", entries.len(), path.display());
    Ok(entries)
}

fn unescape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
