// search-core/src/lib.rs
//! Site search core library
//!
//! Browser-independent logic of the site's search and filter pages:
//! - free-text search over a static page index (OR matching, relevance ranking)
//! - `<mark>` highlighting of matched terms
//! - exact-match category filters and sorting of content cards
//! - recent-search suggestions and debounced live search

pub mod cards;
pub mod category;
pub mod debounce;
pub mod highlight;
pub mod index;
pub mod matcher;
pub mod models;
pub mod ranker;
pub mod recent;
pub mod render;
pub mod search;
pub mod site_index;
pub mod sort;

// Re-exports
pub use cards::{CardError, ContentCard, load_cards};
pub use category::{
    ALL, CardListState, FilterOutcome, SortResult, apply_filter, filter_heading, resolve_category,
};
pub use debounce::{DebouncedTask, Debouncer, TaskOutcome, Throttle};
pub use highlight::highlight;
pub use index::{IndexError, StaticIndex};
pub use matcher::filter;
pub use models::{IndexEntry, Ranked};
pub use query::{Terms, category_from_url, query_from_url, tokenize};
pub use ranker::rank;
pub use recent::{RecentSearches, StorageError};
pub use render::{RenderedPage, render};
pub use search::{SearchOptions, SearchOutcome};
pub use sort::{SortCriteria, SortDirection};

/// Unified entry point: an index plus the options every query runs with
#[derive(Debug, Clone, Default)]
pub struct SiteSearch {
    index: StaticIndex,
    options: SearchOptions,
}

impl SiteSearch {
    pub fn new(index: StaticIndex, options: SearchOptions) -> Self {
        Self { index, options }
    }

    pub fn index(&self) -> &StaticIndex {
        &self.index
    }

    /// Search with a query typed into the search box
    pub fn search(&self, raw: &str) -> SearchOutcome<'_> {
        search::search(&self.index, raw, &self.options)
    }

    /// Search with the `q` parameter of a search page URL
    pub fn search_url(&self, url: &str) -> SearchOutcome<'_> {
        self.search(&query_from_url(url))
    }
}
