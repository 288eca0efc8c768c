//! Fuzzy title suggestions for queries that match nothing.

use super::record::RecordStore;
use rapidfuzz::distance::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a title to be suggested.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A topic title that resembles a query word.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    /// Lowercased topic title
    pub title: String,
    pub score: f64,
}

/// Suggests titles similar to any word of `query`, best first.
///
/// Each title is scored by its best similarity against the query's words.
/// Titles scoring below [`SUGGESTION_THRESHOLD`] are dropped.
pub fn suggest_titles(store: &RecordStore, query: &str, limit: usize) -> Vec<Suggestion> {
    let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if words.is_empty() {
        return vec![];
    }

    let mut suggestions: Vec<Suggestion> = store
        .iter()
        .filter_map(|record| {
            let title = record.title().to_lowercase();
            let score = words
                .iter()
                .map(|word| jaro_winkler::similarity(word.chars(), title.chars()))
                .fold(0.0_f64, f64::max);
            (score >= SUGGESTION_THRESHOLD).then_some(Suggestion { title, score })
        })
        .collect();

    // Stable sort keeps store order among equal scores
    suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
    suggestions.truncate(limit);
    suggestions
}
