use std::cmp::Ordering;
use strum::{EnumIter, EnumString};

/// Orderings offered by the articles page's sort menu
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortCriteria {
    /// Most recent date first
    Newest,
    Oldest,
    /// A-Z by title, ignoring case
    Alphabetical,
    /// Highest popularity first
    Popular,
}

impl SortCriteria {
    /// Direction each criteria sorts its key in
    pub fn direction(&self) -> SortDirection {
        match self {
            SortCriteria::Newest | SortCriteria::Popular => SortDirection::Descending,
            SortCriteria::Oldest | SortCriteria::Alphabetical => SortDirection::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Apply direction to an ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
