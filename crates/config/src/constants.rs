pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "Mansheu Dawah";
pub const APP_NAME: &str = "dawah-search";

pub const CLI_CONFIG_FILE_NAME: &str = "config.toml";
pub const RECENT_SEARCHES_FILE_NAME: &str = "recent-searches.json";

/// Number of past queries kept for the suggestion chips
pub const RECENT_SEARCHES_LIMIT: usize = 6;
/// Delay before a live search runs after the last keystroke
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
