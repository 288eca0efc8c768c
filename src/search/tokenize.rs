//! Query tokenization and term predicates.

use super::record::Record;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How query terms are compiled into predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermSyntax {
    /// Case-insensitive substring test.
    #[default]
    Literal,
    /// Case-insensitive regular expression, compiled without escaping.
    ///
    /// Matches how generated search pages compile each word as a pattern, so
    /// `a.d` matches "add" and `^exp` anchors at the start of the title.
    Pattern,
}

/// One whitespace-delimited query token, compiled once per query.
#[derive(Debug, Clone)]
pub enum Term {
    /// Lowercased needle.
    Literal(String),
    Pattern(Regex),
}

impl Term {
    /// Compiles a single token. In pattern mode, a token that is not a valid
    /// pattern falls back to a literal term.
    pub fn compile(token: &str, syntax: TermSyntax) -> Self {
        match syntax {
            TermSyntax::Literal => Self::Literal(token.to_lowercase()),
            TermSyntax::Pattern => match RegexBuilder::new(token).case_insensitive(true).build() {
                Ok(pattern) => Self::Pattern(pattern),
                Err(e) => {
                    tracing::debug!("Term '{}' is not a valid pattern, matching literally: {}", token, e);
                    Self::Literal(token.to_lowercase())
                }
            },
        }
    }

    /// Tests the term against a record's combined text.
    pub fn is_match(&self, record: &Record) -> bool {
        match self {
            Self::Literal(needle) => record.folded_text().contains(needle.as_str()),
            Self::Pattern(pattern) => pattern.is_match(record.text()),
        }
    }
}

/// Splits a query on whitespace runs and compiles each token.
///
/// An empty or whitespace-only query yields no terms.
pub fn tokenize(query: &str, syntax: TermSyntax) -> Vec<Term> {
    query
        .split_whitespace()
        .map(|token| Term::compile(token, syntax))
        .collect()
}

/// True when every term matches the record. No terms matches everything.
pub fn matches(record: &Record, terms: &[Term]) -> bool {
    terms.iter().all(|term| term.is_match(record))
}
