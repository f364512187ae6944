// search-core/src/index.rs
//! Static index: built once at startup, never mutated afterwards

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::models::IndexEntry;
use crate::site_index::site_entries;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read index file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid index file")]
    Parse(#[from] toml::de::Error),
    #[error("index entry #{position} has an empty {field}")]
    EmptyField { position: usize, field: &'static str },
}

/// On-disk layout: a list of `[[entry]]` tables
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IndexFile {
    #[serde(default, rename = "entry")]
    entries: Vec<IndexEntry>,
}

#[derive(Debug, Clone)]
pub struct StaticIndex {
    entries: Vec<IndexEntry>,
}

impl Default for StaticIndex {
    fn default() -> Self {
        Self::site()
    }
}

impl StaticIndex {
    /// The built-in index of the site's pages
    pub fn site() -> Self {
        Self {
            entries: site_entries(),
        }
    }

    /// Build an index from entries, rejecting any without a title or url
    pub fn from_entries(entries: Vec<IndexEntry>) -> Result<Self, IndexError> {
        for (position, entry) in entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(IndexError::EmptyField { position, field: "title" });
            }
            if entry.url.trim().is_empty() {
                return Err(IndexError::EmptyField { position, field: "url" });
            }
        }
        Ok(Self { entries })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, IndexError> {
        let file: IndexFile = toml::from_str(content)?;
        Self::from_entries(file.entries)
    }

    /// Load an index from a TOML file of `[[entry]]` tables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_toml_str(&content)?;
        tracing::info!("Loaded {} index entries from {:?}", index.len(), path);
        Ok(index)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
