//! Result list building and the query-change session.

use super::record::{Record, RecordStore};
use super::tokenize::{TermSyntax, matches, tokenize};

/// Result cap used when none is configured.
pub const DEFAULT_MAX_LIST: usize = 100;

/// Matches for one query, in store order, plus the primary navigation choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutput<'a> {
    pub results: Vec<&'a Record>,
    /// Lowercased title of the first result, empty when nothing matched
    pub choice: String,
}

impl SearchOutput<'_> {
    /// One line per result, each newline-terminated.
    pub fn list_blob(&self) -> String {
        self.results
            .iter()
            .map(|record| format!("{}\n", record.text()))
            .collect()
    }
}

/// Runs a query against the store with literal terms.
pub fn search<'a>(store: &'a RecordStore, query: &str, max_list: usize) -> SearchOutput<'a> {
    search_with(store, query, max_list, TermSyntax::Literal)
}

/// Runs a query against the store.
///
/// Records are visited in store order and collection stops once `max_list`
/// matches have been gathered.
pub fn search_with<'a>(
    store: &'a RecordStore,
    query: &str,
    max_list: usize,
    syntax: TermSyntax,
) -> SearchOutput<'a> {
    let results: Vec<&Record> = matching_indices(store, query, max_list, syntax)
        .into_iter()
        .filter_map(|index| store.get(index))
        .collect();
    let choice = results
        .first()
        .map(|record| record.title().to_lowercase())
        .unwrap_or_default();

    SearchOutput { results, choice }
}

/// Store indices of the first `max_list` records matching every query term.
fn matching_indices(
    store: &RecordStore,
    query: &str,
    max_list: usize,
    syntax: TermSyntax,
) -> Vec<usize> {
    let terms = tokenize(query, syntax);
    store
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, &terms))
        .map(|(index, _)| index)
        .take(max_list)
        .collect()
}

/// Builds the navigation target for a choice, e.g. `exp` + `.htm`.
///
/// Returns `None` when there is no choice, so callers never navigate to a
/// bare suffix.
pub fn navigate_target(choice: &str, suffix: &str) -> Option<String> {
    if choice.is_empty() {
        return None;
    }
    Some(format!("{}{}", choice.to_lowercase(), suffix))
}

/// Owned snapshot of a search, kept between query-change events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOutput {
    /// Indices into the record store
    pub results: Vec<usize>,
    pub choice: String,
    pub list: String,
}

/// Drives searches from query-change events.
///
/// The session only recomputes when the query *length* differs from the
/// previous query's length; an edit that keeps the length unchanged reuses
/// the previous output. Length is measured in UTF-16 code units, the unit a
/// browser's input field reports. Use [`SearchSession::rerun`] to force
/// evaluation.
#[derive(Debug, Clone)]
pub struct SearchSession {
    max_list: usize,
    syntax: TermSyntax,
    last_len: Option<usize>,
    output: SessionOutput,
}

impl SearchSession {
    pub fn new(max_list: usize, syntax: TermSyntax) -> Self {
        Self {
            max_list,
            syntax,
            last_len: None,
            output: SessionOutput::default(),
        }
    }

    /// Handles a query-change event. Returns whether the output was recomputed.
    pub fn update(&mut self, store: &RecordStore, query: &str) -> bool {
        let len = query_len(query);
        if self.last_len == Some(len) {
            tracing::debug!("Query length {} unchanged, keeping previous results", len);
            return false;
        }
        self.rerun(store, query);
        true
    }

    /// Recomputes the output regardless of the previous query.
    pub fn rerun(&mut self, store: &RecordStore, query: &str) -> &SessionOutput {
        self.last_len = Some(query_len(query));

        let results = matching_indices(store, query, self.max_list, self.syntax);
        let mut choice = String::new();
        let mut list = String::new();
        for record in results.iter().filter_map(|&index| store.get(index)) {
            if choice.is_empty() {
                choice = record.title().to_lowercase();
            }
            list.push_str(record.text());
            list.push('\n');
        }

        tracing::debug!("Query '{}' matched {} records", query, results.len());
        self.output = SessionOutput {
            results,
            choice,
            list,
        };
        &self.output
    }

    pub fn output(&self) -> &SessionOutput {
        &self.output
    }

    /// Primary choice of the last evaluated query.
    pub fn choice(&self) -> &str {
        &self.output.choice
    }

    pub fn max_list(&self) -> usize {
        self.max_list
    }
}

fn query_len(query: &str) -> usize {
    query.encode_utf16().count()
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LIST, TermSyntax::default())
    }
}
