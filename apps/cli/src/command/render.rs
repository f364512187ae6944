use super::Command;
use super::output::remember;
use crate::config::Config;
use crate::error::Result;
use search_core::{RecentSearches, SiteSearch, render};

pub struct RenderCommand {
    config: Config,
    query: String,
}

impl RenderCommand {
    pub fn new(config: Config, query: String) -> Self {
        Self { config, query }
    }
}

#[async_trait::async_trait]
impl Command for RenderCommand {
    async fn execute(&self) -> Result<()> {
        let site = SiteSearch::new(self.config.load_index()?, self.config.search_options());
        let outcome = site.search(&self.query);
        let page = render(&outcome);

        println!("<p id=\"searchSummary\">{}</p>", page.summary);
        println!("<div id=\"searchResults\">");
        print!("{}", page.results);
        println!("</div>");

        let mut recent = RecentSearches::load(
            self.config.recent_searches_path(),
            self.config.recent_limit,
        );
        remember(&mut recent, &outcome);
        Ok(())
    }
}
