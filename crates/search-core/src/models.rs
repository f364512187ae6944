// search-core/src/models.rs
//! Data model definitions

use serde::{Deserialize, Serialize};

/// One searchable page of the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Display name of the target page
    pub title: String,
    /// Relative link to the page
    pub url: String,
    /// One or two sentence summary shown under the title
    #[serde(default)]
    pub description: String,
    /// Space separated keyword bag (synonyms, transliterations)
    #[serde(default)]
    pub tags: String,
}

impl IndexEntry {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
            tags: tags.into(),
        }
    }

    /// Lowercase concatenation of title, description and tags
    pub fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.tags).to_lowercase()
    }
}

/// A matched entry together with its relevance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<'a> {
    pub entry: &'a IndexEntry,
    /// Number of distinct query terms found in the haystack
    pub score: usize,
}
