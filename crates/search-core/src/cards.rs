// search-core/src/cards.rs
//! Content cards shown on the articles, topic and publications pages

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCard {
    pub title: String,
    /// The single discriminator category filters compare against
    pub category: String,
    /// Publication date, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

impl ContentCard {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            date: None,
            popularity: None,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_popularity(mut self, popularity: u32) -> Self {
        self.popularity = Some(popularity);
        self
    }

    /// Category as compared by filters: trimmed and lowercased
    pub fn normalized_category(&self) -> String {
        self.category.trim().to_lowercase()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("failed to read card file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid card file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CardFile {
    #[serde(default, rename = "card")]
    cards: Vec<ContentCard>,
}

pub fn cards_from_toml_str(content: &str) -> Result<Vec<ContentCard>, CardError> {
    let file: CardFile = toml::from_str(content)?;
    Ok(file.cards)
}

/// Load cards from a TOML file of `[[card]]` tables, in display order
pub fn load_cards<P: AsRef<Path>>(path: P) -> Result<Vec<ContentCard>, CardError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| CardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = cards_from_toml_str(&content)?;
    tracing::debug!("Loaded {} cards from {:?}", cards.len(), path);
    Ok(cards)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cards_from_toml_str() {
        let content = r#"
            [[card]]
            title = "Strengthening Tawheed in Daily Life"
            category = "faith"
            date = "2025-08-30"
            popularity = 12

            [[card]]
            title = "Reflecting on Short Surahs"
            category = " Quran "
        "#;
        let cards = cards_from_toml_str(content).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].date, NaiveDate::from_ymd_opt(2025, 8, 30));
        assert_eq!(cards[0].popularity, Some(12));
        assert_eq!(cards[1].date, None);
        assert_eq!(cards[1].normalized_category(), "quran");
    }

    #[test]
    fn test_bad_date_is_parse_error() {
        let content = "[[card]]\ntitle = \"A\"\ncategory = \"faith\"\ndate = \"30/08/2025\"\n";
        assert!(matches!(cards_from_toml_str(content), Err(CardError::Parse(_))));
    }

    #[test]
    fn test_load_cards_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_cards(dir.path().join("cards.toml")), Err(CardError::Io { .. })));
    }
}
