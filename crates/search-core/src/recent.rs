// search-core/src/recent.rs
//! Recent searches, used only for the suggestion chips shown on focus.
//!
//! Storage is best effort: an unreadable or corrupt file means "no recent
//! searches" and never reaches the caller as an error.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write recent searches to {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode recent searches")]
    Encode(#[from] serde_json::Error),
}

/// Most-recent-first list of past queries, capped and case-insensitively unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSearches {
    path: PathBuf,
    limit: usize,
    queries: Vec<String>,
}

impl RecentSearches {
    /// An empty list persisted at `path`
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
            queries: Vec::new(),
        }
    }

    /// Load the list stored at `path`; any failure yields an empty list
    pub fn load(path: impl Into<PathBuf>, limit: usize) -> Self {
        let mut recent = Self::new(path, limit);
        let stored = match read_queries(&recent.path) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Ignoring recent searches at {:?}: {}", recent.path, e);
                Vec::new()
            }
        };

        // Re-record oldest first so a hand-edited file is normalized too
        for query in stored.iter().rev() {
            recent.record(query);
        }
        recent
    }

    /// Put `query` at the front, dropping any case-insensitive duplicate.
    /// Blank queries are ignored.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() || self.limit == 0 {
            return;
        }

        let key = query.to_lowercase();
        self.queries.retain(|q| q.to_lowercase() != key);
        self.queries.insert(0, query.to_string());
        self.queries.truncate(self.limit);
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.queries
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), StorageError> {
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let data = serde_json::to_string(&self.queries)?;
        std::fs::write(&self.path, data).map_err(io_err)?;
        tracing::debug!("Saved {} recent searches to {:?}", self.queries.len(), self.path);
        Ok(())
    }
}

fn read_queries(path: &Path) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    match std::fs::read_to_string(path) {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}
