//! Plain-text rendering of search outcomes for the terminal

use search_core::render::PROMPT_TEXT;
use search_core::{RecentSearches, SearchOutcome};
use std::fmt::Write;

pub fn format_outcome(outcome: &SearchOutcome<'_>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    match outcome {
        SearchOutcome::Prompt => {
            let _ = writeln!(out, "{}", PROMPT_TEXT);
        }
        SearchOutcome::NoMatches { query } => {
            let _ = writeln!(out, "No results found containing \"{}\".", query);
            let _ = writeln!(out, "Try different keywords or a broader term.");
        }
        SearchOutcome::Results { query, total, hits, .. } => {
            let _ = writeln!(
                out,
                "Showing {} result{} for \"{}\"",
                total,
                if *total == 1 { "" } else { "s" },
                query
            );
            for (position, hit) in hits.iter().enumerate() {
                let _ = writeln!(out);
                let _ = writeln!(out, "{:>3}. {}  [{}]", position + 1, hit.entry.title, hit.score);
                let _ = writeln!(out, "     {}", hit.entry.url);
                if !hit.entry.description.is_empty() {
                    let _ = writeln!(out, "     {}", hit.entry.description);
                }
            }
            if hits.len() < *total {
                let _ = writeln!(out);
                let _ = writeln!(out, "... {} more", total - hits.len());
            }
        }
    }
    out
}

/// Suggestion chips, as shown when the search box gains focus
pub fn format_suggestions(recent: &RecentSearches) -> Option<String> {
    if recent.suggestions().is_empty() {
        return None;
    }
    Some(format!("Recent searches: {}", recent.suggestions().join(" · ")))
}

/// Remember the query of a real search and persist the list.
/// Storage failures only degrade suggestions, so they are logged, not returned.
pub fn remember(recent: &mut RecentSearches, outcome: &SearchOutcome<'_>) {
    let Some(query) = outcome.query() else {
        return;
    };
    recent.record(query);
    if let Err(e) = recent.save() {
        tracing::warn!("Could not save recent searches: {}", e);
    }
}
