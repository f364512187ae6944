// search-core/src/ranker.rs
//! Relevance ranking by number of distinct matched terms

use query::Terms;

use crate::matcher::count_matching_terms;
use crate::models::{IndexEntry, Ranked};
use crate::sort::SortDirection;

/// Score each entry and order by descending score.
///
/// `sort_by` is stable: entries with the same score keep their input order.
/// There is no secondary key.
pub fn rank<'a>(entries: Vec<&'a IndexEntry>, terms: &Terms) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = entries
        .into_iter()
        .map(|entry| Ranked {
            score: count_matching_terms(&entry.haystack(), terms),
            entry,
        })
        .collect();

    ranked.sort_by(|a, b| SortDirection::Descending.apply(a.score.cmp(&b.score)));
    ranked
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::StaticIndex;
    use crate::matcher::filter;
    use query::tokenize;

    fn titles<'a>(ranked: &[Ranked<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|r| r.entry.title.as_str()).collect()
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let a = IndexEntry::new("A", "a.html", "", "dua");
        let b = IndexEntry::new("B", "b.html", "", "dua");
        let terms = tokenize("dua");

        for _ in 0..16 {
            let ranked = rank(vec![&a, &b], &terms);
            assert_eq!(titles(&ranked), ["A", "B"]);
            assert_eq!(ranked[0].score, 1);
            assert_eq!(ranked[1].score, 1);
        }
    }

    #[test]
    fn test_higher_score_first() {
        let only_morning = IndexEntry::new("Only", "only.html", "", "morning");
        let both = IndexEntry::new("Both", "both.html", "", "morning adhkar");
        let ranked = rank(vec![&only_morning, &both], &tokenize("morning adhkar"));

        assert_eq!(titles(&ranked), ["Both", "Only"]);
        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[1].score, 1);
    }

    #[test]
    fn test_ties_after_reorder_stay_stable() {
        let entries = vec![
            IndexEntry::new("One", "1", "", "x"),
            IndexEntry::new("Two", "2", "", "x y"),
            IndexEntry::new("Three", "3", "", "y"),
            IndexEntry::new("Four", "4", "", "x y"),
        ];
        let ranked = rank(entries.iter().collect(), &tokenize("x y"));
        assert_eq!(titles(&ranked), ["Two", "Four", "One", "Three"]);
    }

    #[test]
    fn test_morning_adhkar_on_site_index() {
        let index = StaticIndex::site();
        let terms = tokenize("morning adhkar");
        let ranked = rank(filter(index.entries(), &terms), &terms);

        assert_eq!(titles(&ranked[..2]), ["Morning Adhkar", "Waking Up Adhkar"]);
        assert!(ranked[..2].iter().all(|r| r.score == 2));
        assert!(ranked[2..].iter().all(|r| r.score == 1));
        // ties keep index order
        assert_eq!(ranked[2].entry.title, "Evening Adhkar");
    }
}
