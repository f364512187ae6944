use super::Command;
use crate::error::{Result, WrapErr};
use search_core::{
    CardListState, SortCriteria, SortResult, category_from_url, filter_heading, load_cards,
    resolve_category,
};
use std::path::PathBuf;
use std::str::FromStr;

pub struct FilterCommand {
    cards: PathBuf,
    category: String,
    url: Option<String>,
    sort: Option<String>,
}

impl FilterCommand {
    pub fn new(cards: PathBuf, category: String, url: Option<String>, sort: Option<String>) -> Self {
        Self {
            cards,
            // Filter buttons carry lowercase values
            category: category.trim().to_lowercase(),
            url,
            sort,
        }
    }
}

#[async_trait::async_trait]
impl Command for FilterCommand {
    async fn execute(&self) -> Result<()> {
        let cards = load_cards(&self.cards).wrap_err("Load cards error")?;
        let category = match &self.url {
            Some(url) => resolve_category(&cards, category_from_url(url).as_deref()),
            None => self.category.clone(),
        };
        let (mut state, mut outcome) = CardListState::new(cards).select(category);

        if let Some(sort) = &self.sort {
            match SortCriteria::from_str(sort) {
                Ok(criteria) => {
                    let (sorted, result, sorted_outcome) = state.sort(criteria);
                    if result == SortResult::Unavailable {
                        println!("Popularity data unavailable. Showing default order.");
                    }
                    state = sorted;
                    outcome = sorted_outcome;
                }
                Err(_) => tracing::warn!("Unknown sort '{}', keeping current order", sort),
            }
        }

        let heading = filter_heading(state.category()).unwrap_or_else(|| "All".to_string());
        println!("{} ({})", heading, outcome.counter_label());
        for card in outcome.visible_cards(state.cards()) {
            match card.date {
                Some(date) => println!("  - {} [{}] {}", card.title, card.normalized_category(), date),
                None => println!("  - {} [{}]", card.title, card.normalized_category()),
            }
        }
        Ok(())
    }
}
