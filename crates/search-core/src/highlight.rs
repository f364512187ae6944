// search-core/src/highlight.rs
//! Wraps occurrences of query terms in `<mark>` for display

use query::Terms;
use regex::RegexBuilder;

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of each term in `<mark>...</mark>`,
/// keeping the original casing of the matched text.
///
/// Terms are applied one after another in their iteration order and are
/// matched literally (regex metacharacters are escaped). Overlapping terms,
/// or a term that occurs in the marker itself such as `mark`, wrap again
/// inside earlier markers; this mirrors the site's behaviour and is left as is.
pub fn highlight(text: &str, terms: &Terms) -> String {
    let mut result = text.to_string();

    for term in terms {
        let pattern = match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => pattern,
            Err(e) => {
                // Leave the text unhighlighted for this term
                tracing::warn!("Cannot highlight term '{}': {}", term, e);
                continue;
            }
        };

        let replaced = pattern.replace_all(&result, |caps: &regex::Captures<'_>| {
            format!("{MARK_OPEN}{}{MARK_CLOSE}", &caps[0])
        });
        result = replaced.into_owned();
    }

    result
}
