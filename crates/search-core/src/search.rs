// search-core/src/search.rs
//! The search page pipeline: tokenize, match, rank

use query::{Terms, tokenize};
use serde::Serialize;

use crate::index::StaticIndex;
use crate::matcher::filter;
use crate::models::Ranked;
use crate::ranker::rank;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Cap on returned hits; the reported total is not capped
    pub max_results: Option<usize>,
}

/// What the search page shows for a query.
///
/// "Nothing typed" and "nothing found" are different states: the first
/// prompts for a keyword, the second echoes the query in an empty state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum SearchOutcome<'a> {
    Prompt,
    NoMatches {
        query: String,
    },
    Results {
        query: String,
        terms: Terms,
        /// Matches before `max_results` was applied
        total: usize,
        hits: Vec<Ranked<'a>>,
    },
}

impl SearchOutcome<'_> {
    pub fn hits(&self) -> &[Ranked<'_>] {
        match self {
            SearchOutcome::Results { hits, .. } => hits,
            _ => &[],
        }
    }

    /// The trimmed query as typed, if any
    pub fn query(&self) -> Option<&str> {
        match self {
            SearchOutcome::Prompt => None,
            SearchOutcome::NoMatches { query } | SearchOutcome::Results { query, .. } => {
                Some(query)
            }
        }
    }
}

/// Run a raw query against the index
pub fn search<'a>(index: &'a StaticIndex, raw: &str, options: &SearchOptions) -> SearchOutcome<'a> {
    let terms = tokenize(raw);
    if terms.is_empty() {
        return SearchOutcome::Prompt;
    }

    let query = raw.trim().to_string();
    let mut hits = rank(filter(index.entries(), &terms), &terms);
    tracing::debug!("Query '{}' ({} terms) matched {} entries", query, terms.len(), hits.len());

    if hits.is_empty() {
        return SearchOutcome::NoMatches { query };
    }

    let total = hits.len();
    if let Some(max) = options.max_results {
        hits.truncate(max);
    }

    SearchOutcome::Results {
        query,
        terms,
        total,
        hits,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_query_prompts(#[case] raw: &str) {
        let index = StaticIndex::site();
        let outcome = search(&index, raw, &SearchOptions::default());
        assert_eq!(outcome, SearchOutcome::Prompt);
        assert!(outcome.hits().is_empty());
        assert_eq!(outcome.query(), None);
    }

    #[test]
    fn test_qibla_has_no_matches() {
        let index = StaticIndex::site();
        let outcome = search(&index, "qibla", &SearchOptions::default());
        assert_eq!(outcome, SearchOutcome::NoMatches { query: "qibla".into() });
    }

    #[test]
    fn test_results_ranked() {
        let index = StaticIndex::site();
        let outcome = search(&index, "  Morning Adhkar ", &SearchOptions::default());
        let SearchOutcome::Results { query, terms, total, hits } = &outcome else {
            panic!("expected results, got {outcome:?}");
        };
        assert_eq!(query, "Morning Adhkar");
        assert_eq!(terms.as_slice(), ["morning", "adhkar"]);
        assert_eq!(*total, hits.len());
        assert_eq!(hits[0].entry.title, "Morning Adhkar");
    }

    #[test]
    fn test_max_results_truncates_hits_not_total() {
        let index = StaticIndex::site();
        let options = SearchOptions { max_results: Some(2) };
        let outcome = search(&index, "duas", &options);
        let SearchOutcome::Results { total, hits, .. } = outcome else {
            panic!("expected results");
        };
        assert_eq!(hits.len(), 2);
        assert!(total > 2);
    }

    #[test]
    fn test_outcome_serializes_with_state_tag() {
        let index = StaticIndex::site();
        let json = serde_json::to_value(search(&index, "qibla", &SearchOptions::default())).unwrap();
        assert_eq!(json["state"], "no-matches");
        assert_eq!(json["query"], "qibla");

        let json = serde_json::to_value(search(&index, "", &SearchOptions::default())).unwrap();
        assert_eq!(json["state"], "prompt");
    }
}
