use super::Command;
use crate::config::Config;
use crate::error::Result;
use search_core::RecentSearches;

pub struct RecentCommand {
    config: Config,
}

impl RecentCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl Command for RecentCommand {
    async fn execute(&self) -> Result<()> {
        let recent = RecentSearches::load(
            self.config.recent_searches_path(),
            self.config.recent_limit,
        );
        for query in recent.suggestions() {
            println!("{}", query);
        }
        Ok(())
    }
}

pub struct ClearRecentCommand {
    config: Config,
}

impl ClearRecentCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl Command for ClearRecentCommand {
    async fn execute(&self) -> Result<()> {
        let mut recent = RecentSearches::new(
            self.config.recent_searches_path(),
            self.config.recent_limit,
        );
        recent.clear();
        recent.save()?;
        tracing::info!("Cleared recent searches at {:?}", recent.path());
        Ok(())
    }
}
