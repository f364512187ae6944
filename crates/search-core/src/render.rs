// search-core/src/render.rs
//! HTML for the search page: summary line, empty state and result cards.
//!
//! Index text is curated and trusted. The query is user input, so every
//! place that echoes it escapes it first.

use std::fmt::Write;

use crate::highlight::highlight;
use crate::search::SearchOutcome;

pub const PROMPT_TEXT: &str = "Type a keyword to search across Mansheu Dawah.";

/// Rendered search page fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub summary: String,
    pub results: String,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// `Showing <strong>N</strong> result(s) for <strong>"query"</strong>`
pub fn summary_line(count: usize, query: &str) -> String {
    format!(
        "Showing <strong>{}</strong> result{} for <strong>\"{}\"</strong>",
        count,
        if count == 1 { "" } else { "s" },
        escape_html(query)
    )
}

pub fn empty_state(query: &str) -> String {
    format!(
        "<div class=\"search-empty\">\n\
         \x20   <p>No results found containing \"<strong>{}</strong>\".</p>\n\
         \x20   <p>Try different keywords or a broader term.</p>\n\
         </div>",
        escape_html(query)
    )
}

pub fn render(outcome: &SearchOutcome<'_>) -> RenderedPage {
    match outcome {
        SearchOutcome::Prompt => RenderedPage {
            summary: PROMPT_TEXT.to_string(),
            results: String::new(),
        },
        SearchOutcome::NoMatches { query } => RenderedPage {
            summary: summary_line(0, query),
            results: empty_state(query),
        },
        SearchOutcome::Results { query, terms, total, hits } => {
            let mut results = String::new();
            for hit in hits {
                // Writing into a String cannot fail
                let _ = write!(
                    results,
                    "<article class=\"search-result-card\">\n\
                     \x20   <h2 class=\"search-result-title\">\n\
                     \x20       <a href=\"{url}\">{title}</a>\n\
                     \x20   </h2>\n\
                     \x20   <p class=\"search-result-description\">\n\
                     \x20       {description}\n\
                     \x20   </p>\n\
                     \x20   <a class=\"search-result-link\" href=\"{url}\">\n\
                     \x20       Open page\n\
                     \x20       <i class=\"fas fa-arrow-right\"></i>\n\
                     \x20   </a>\n\
                     </article>\n",
                    url = hit.entry.url,
                    title = highlight(&hit.entry.title, terms),
                    description = highlight(&hit.entry.description, terms),
                );
            }
            RenderedPage {
                summary: summary_line(*total, query),
                results,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::StaticIndex;
    use crate::search::{SearchOptions, search};
    use rstest::rstest;

    #[test]
    fn test_prompt_is_not_zero_results() {
        let index = StaticIndex::site();
        let page = render(&search(&index, "  ", &SearchOptions::default()));
        assert_eq!(page.summary, PROMPT_TEXT);
        assert!(page.results.is_empty());
        assert!(!page.summary.contains("0 results"));
    }

    #[test]
    fn test_no_matches_echoes_query() {
        let index = StaticIndex::site();
        let page = render(&search(&index, "qibla", &SearchOptions::default()));
        assert_eq!(
            page.summary,
            "Showing <strong>0</strong> results for <strong>\"qibla\"</strong>"
        );
        assert!(page.results.contains("No results found containing \"<strong>qibla</strong>\"."));
        assert!(page.results.contains("Try different keywords or a broader term."));
    }

    #[test]
    fn test_results_are_highlighted() {
        let index = StaticIndex::site();
        let page = render(&search(&index, "ruqyah", &SearchOptions::default()));
        assert_eq!(
            page.summary,
            "Showing <strong>1</strong> result for <strong>\"ruqyah\"</strong>"
        );
        assert!(page.results.contains("<a href=\"ruqyah.html\"><mark>Ruqyah</mark> - Islamic Healing</a>"));
        assert_eq!(page.results.matches("<article").count(), 1);
    }

    #[test]
    fn test_query_echo_is_escaped() {
        let index = StaticIndex::site();
        let page = render(&search(&index, "<script>x</script>", &SearchOptions::default()));
        assert!(!page.summary.contains("<script>"));
        assert!(page.summary.contains("&lt;script&gt;"));
    }

    #[rstest]
    #[case("Tom & Jerry", "Tom &amp; Jerry")]
    #[case("\"q\" 'x'", "&quot;q&quot; &#039;x&#039;")]
    #[case("plain", "plain")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }
}
