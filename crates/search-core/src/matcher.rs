// search-core/src/matcher.rs
//! Free-text matching: an entry matches when ANY query term occurs in it

use query::Terms;

use crate::models::IndexEntry;

/// Number of distinct terms that are substrings of `haystack`
pub fn count_matching_terms(haystack: &str, terms: &Terms) -> usize {
    terms.iter().filter(|term| haystack.contains(term.as_str())).count()
}

/// Keep the entries containing at least one term, in index order.
///
/// Multi-word queries are OR-ed so that a page matching only one of the
/// words still shows up. No terms means no results.
pub fn filter<'a>(entries: &'a [IndexEntry], terms: &Terms) -> Vec<&'a IndexEntry> {
    if terms.is_empty() {
        return Vec::new();
    }

    entries
        .iter()
        .filter(|entry| {
            let haystack = entry.haystack();
            terms.iter().any(|term| haystack.contains(term.as_str()))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::StaticIndex;
    use query::tokenize;
    use rstest::rstest;

    fn sample() -> Vec<IndexEntry> {
        vec![
            IndexEntry::new("Morning Adhkar", "morning.html", "Start the day.", "morning adhkar fajr"),
            IndexEntry::new("Waking Up", "waking.html", "After sleep.", "waking morning"),
            IndexEntry::new("Travel Duas", "travel.html", "Journey safety.", "travel safar"),
        ]
    }

    #[rstest]
    #[case("morning", &["morning.html", "waking.html"])]
    #[case("SAFAR", &["travel.html"])]
    #[case("travel morning", &["morning.html", "waking.html", "travel.html"])]
    #[case("sleep", &["waking.html"])]
    #[case("qibla", &[])]
    fn test_filter(#[case] query: &str, #[case] expected: &[&str]) {
        let entries = sample();
        let urls: Vec<&str> = filter(&entries, &tokenize(query))
            .into_iter()
            .map(|e| e.url.as_str())
            .collect();
        assert_eq!(urls, expected);
    }

    #[test]
    fn test_empty_terms_match_nothing() {
        let entries = sample();
        assert!(filter(&entries, &tokenize("   ")).is_empty());
    }

    #[test]
    fn test_substring_containment() {
        let entries = sample();
        // "jour" is a prefix of "journey"
        assert_eq!(filter(&entries, &tokenize("jour")).len(), 1);
    }

    #[rstest]
    #[case("dua")]
    #[case("night protection")]
    #[case("99 names")]
    #[case("a")]
    #[case("zzz qqq")]
    fn test_filter_returns_subset_of_index(#[case] query: &str) {
        let index = StaticIndex::site();
        let matched = filter(index.entries(), &tokenize(query));
        assert!(matched.len() <= index.len());
        for entry in matched {
            assert!(index.entries().contains(entry));
        }
    }

    #[test]
    fn test_count_matching_terms_counts_distinct() {
        let terms = tokenize("morning adhkar morning evening");
        assert_eq!(count_matching_terms("morning adhkar dhikr", &terms), 2);
    }
}
