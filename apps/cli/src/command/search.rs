use super::Command;
use super::output::{format_outcome, format_suggestions, remember};
use crate::config::Config;
use crate::error::Result;
use search_core::{RecentSearches, SearchOutcome, SiteSearch};

pub struct SearchCommand {
    config: Config,
    query: String,
    json: bool,
}

impl SearchCommand {
    pub fn new(config: Config, query: String, json: bool) -> Self {
        Self { config, query, json }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let site = SiteSearch::new(self.config.load_index()?, self.config.search_options());
        let mut recent = RecentSearches::load(
            self.config.recent_searches_path(),
            self.config.recent_limit,
        );

        let outcome = site.search(&self.query);
        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print!("{}", format_outcome(&outcome));
            if matches!(outcome, SearchOutcome::Prompt) {
                if let Some(suggestions) = format_suggestions(&recent) {
                    println!("{}", suggestions);
                }
            }
        }

        remember(&mut recent, &outcome);
        Ok(())
    }
}
