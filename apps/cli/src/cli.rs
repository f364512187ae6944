use clap::{ArgAction, Args, Parser, Subcommand};
use search_core::query_from_url;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the site and list ranked results
    Search {
        #[command(flatten)]
        input: QueryInput,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the search page HTML (summary and result cards) for a query
    Render {
        #[command(flatten)]
        input: QueryInput,
    },
    /// Search as you type: one query per stdin line, debounced
    Live,
    /// Show the cards of a category
    Filter {
        /// TOML file of [[card]] tables
        cards: PathBuf,
        /// Category to show, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Take the category from an articles page URL
        /// (e.g. "articles.html?category=faith"); unknown categories show all
        #[arg(long, conflicts_with = "category")]
        url: Option<String>,
        /// Reorder first: newest, oldest, alphabetical or popular
        #[arg(short, long)]
        sort: Option<String>,
    },
    /// List recent searches, most recent first
    Recent,
    /// Forget recent searches
    ClearRecent,
}

#[derive(Args, Debug)]
pub struct QueryInput {
    /// Query words
    pub query: Vec<String>,

    /// Take the query from a search page URL (e.g. "search.html?q=dua")
    #[arg(long, conflicts_with = "query")]
    pub url: Option<String>,
}

impl QueryInput {
    pub fn raw(&self) -> String {
        match &self.url {
            Some(url) => query_from_url(url),
            None => self.query.join(" "),
        }
    }
}
