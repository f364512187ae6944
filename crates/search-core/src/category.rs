// search-core/src/category.rs
//! Exact-match category filtering and sorting of content cards.
//!
//! Unlike free-text search, a category filter never matches substrings: a
//! card is shown only when its category equals the selected filter. The
//! current selection lives in [`CardListState`], owned by the caller, and
//! every action returns the new state together with what is visible.

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::cards::ContentCard;
use crate::sort::SortCriteria;

/// The filter value that shows every card
pub const ALL: &str = "all";

/// Which cards are visible after a filter action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Visibility of each card, parallel to the card list
    pub visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    /// Text for the counter display, e.g. `"1 item"` or `"2 items"`
    pub fn counter_label(&self) -> String {
        let noun = if self.visible_count == 1 { "item" } else { "items" };
        format!("{} {}", self.visible_count, noun)
    }

    /// The visible cards, in display order
    pub fn visible_cards<'a>(
        &'a self,
        cards: &'a [ContentCard],
    ) -> impl Iterator<Item = &'a ContentCard> + 'a {
        cards
            .iter()
            .zip(self.visible.iter())
            .filter_map(|(card, &visible)| visible.then_some(card))
    }
}

/// Compute card visibility for `filter`.
///
/// `"all"` shows everything; any other value shows the cards whose trimmed,
/// lowercased category is exactly `filter`.
pub fn apply_filter(cards: &[ContentCard], filter: &str) -> FilterOutcome {
    let visible: Vec<bool> = cards
        .iter()
        .map(|card| filter == ALL || card.normalized_category() == filter)
        .collect();
    let visible_count = visible.iter().filter(|&&v| v).count();

    FilterOutcome {
        visible,
        visible_count,
    }
}

/// Heading shown for a filtered topic page: each word capitalized.
/// `None` for `"all"`, where the topic keeps its own name.
pub fn filter_heading(filter: &str) -> Option<String> {
    if filter == ALL {
        return None;
    }

    let heading = filter
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    Some(heading)
}

/// The category a page opens with when the URL asks for `requested`.
///
/// A category no card belongs to falls back to `"all"`, so a stale link
/// never opens an empty page.
pub fn resolve_category(cards: &[ContentCard], requested: Option<&str>) -> String {
    let Some(requested) = requested.map(|r| r.trim().to_lowercase()) else {
        return ALL.to_string();
    };
    if requested == ALL || cards.iter().any(|card| card.normalized_category() == requested) {
        return requested;
    }
    tracing::debug!("No cards in category '{}', showing all", requested);
    ALL.to_string()
}

/// Alphabetical key: accents folded first, so "Émaan" sorts with "Emaan"
/// rather than after "z". The plain lowercase title breaks ties.
fn title_key(title: &str) -> (String, String) {
    let lower = title.trim().to_lowercase();
    let folded = lower.nfd().filter(|c| !is_combining_mark(*c)).collect();
    (folded, lower)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortResult {
    Sorted,
    /// No card carries the data this criteria needs; order unchanged
    Unavailable,
}

/// Reorder cards in place with a stable sort. Cards without a date sort as
/// the oldest.
pub fn sort_cards(cards: &mut [ContentCard], criteria: SortCriteria) -> SortResult {
    let direction = criteria.direction();
    match criteria {
        SortCriteria::Newest | SortCriteria::Oldest => {
            cards.sort_by(|a, b| direction.apply(a.date.cmp(&b.date)));
        }
        SortCriteria::Alphabetical => {
            cards.sort_by_cached_key(|card| title_key(&card.title));
        }
        SortCriteria::Popular => {
            if !cards.iter().any(|card| card.popularity.is_some()) {
                return SortResult::Unavailable;
            }
            cards.sort_by(|a, b| {
                direction.apply(a.popularity.unwrap_or(0).cmp(&b.popularity.unwrap_or(0)))
            });
        }
    }
    SortResult::Sorted
}

/// Cards in display order plus the selected category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListState {
    cards: Vec<ContentCard>,
    category: String,
}

impl CardListState {
    pub fn new(cards: Vec<ContentCard>) -> Self {
        Self {
            cards,
            category: ALL.to_string(),
        }
    }

    pub fn cards(&self) -> &[ContentCard] {
        &self.cards
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Visibility under the current category
    pub fn outcome(&self) -> FilterOutcome {
        apply_filter(&self.cards, &self.category)
    }

    /// Select a category and filter with it
    pub fn select(mut self, category: impl Into<String>) -> (Self, FilterOutcome) {
        self.category = category.into();
        let outcome = self.outcome();
        tracing::debug!(
            "Category '{}': {} of {} cards visible",
            self.category,
            outcome.visible_count,
            self.cards.len()
        );
        (self, outcome)
    }

    /// Reorder the cards, then re-apply the current category
    pub fn sort(mut self, criteria: SortCriteria) -> (Self, SortResult, FilterOutcome) {
        let result = sort_cards(&mut self.cards, criteria);
        if result == SortResult::Unavailable {
            tracing::info!("No data to sort by {}, keeping current order", criteria);
        }
        let outcome = self.outcome();
        (self, result, outcome)
    }
}
