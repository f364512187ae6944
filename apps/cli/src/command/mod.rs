mod filter;
mod live;
mod output;
mod recent;
mod render;
mod search;

use crate::error::Result;

pub use filter::FilterCommand;
pub use live::LiveCommand;
pub use recent::{ClearRecentCommand, RecentCommand};
pub use render::RenderCommand;
pub use search::SearchCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}
