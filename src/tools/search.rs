//! Keyword search and navigation handlers.

use crate::search::{navigate_target, suggest_titles};
use crate::state::NavState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

/// Number of "did you mean" titles offered when nothing matches.
const SUGGESTION_LIMIT: usize = 5;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query; every word must appear in a topic (case-insensitive)
    pub query: String,
    /// Maximum number of results to display (default: all, up to the configured cap)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Execute a search and remember its choice for `navigate`.
pub async fn handle_search(state: &NavState, request: SearchRequest) -> Result<String, String> {
    let store = state.store();
    let mut session = state.session().lock().await;
    session.rerun(store, &request.query);
    let output = session.output();

    if output.results.is_empty() {
        let mut msg = format!("No results found for '{}'.\n\n", request.query);

        let suggestions = suggest_titles(store, &request.query, SUGGESTION_LIMIT);
        if !suggestions.is_empty() {
            msg.push_str("Did you mean one of these?\n");
            for suggestion in suggestions {
                writeln!(msg, "• `{}`", suggestion.title).map_err(|e| e.to_string())?;
            }
            msg.push('\n');
        }

        msg.push_str("Search tips:\n");
        msg.push_str("• Every word must appear in the topic, so try fewer words\n");
        msg.push_str("• Words match anywhere, so 'expon' finds 'Exponential'\n");
        return Ok(msg);
    }

    let shown = request.limit.unwrap_or(output.results.len());
    let mut result = format!(
        "Search results for '{}' ({} of at most {}):\n\n",
        request.query,
        output.results.len(),
        session.max_list()
    );

    for (position, line) in output.list.lines().take(shown).enumerate() {
        writeln!(result, "{}. {}", position + 1, line).map_err(|e| e.to_string())?;
    }
    if shown < output.results.len() {
        writeln!(result, "… {} more", output.results.len() - shown).map_err(|e| e.to_string())?;
    }

    let suffix = &state.config().search.page_suffix;
    let written = match navigate_target(&output.choice, suffix) {
        Some(target) => write!(result, "\nChoice: {} ({})\n", output.choice, target),
        None => write!(result, "\nChoice: (none)\n"),
    };
    written.map_err(|e| e.to_string())?;

    Ok(result)
}

/// Resolve the navigation target of the most recent search.
pub async fn handle_navigate(state: &NavState) -> Result<String, String> {
    let session = state.session().lock().await;
    let suffix = &state.config().search.page_suffix;

    navigate_target(session.choice(), suffix).ok_or_else(|| {
        "No topic selected. Run search with a query that matches at least one topic first."
            .to_string()
    })
}
