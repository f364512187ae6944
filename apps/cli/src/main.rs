mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = config::Config::load(command_line.config.as_deref())
        .context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Search { input, json } => {
                Box::new(command::SearchCommand::new(cfg, input.raw(), json))
            }
            cli::Commands::Render { input } => {
                Box::new(command::RenderCommand::new(cfg, input.raw()))
            }
            cli::Commands::Live => Box::new(command::LiveCommand::new(cfg)),
            cli::Commands::Filter { cards, category, url, sort } => {
                Box::new(command::FilterCommand::new(cards, category, url, sort))
            }
            cli::Commands::Recent => Box::new(command::RecentCommand::new(cfg)),
            cli::Commands::ClearRecent => Box::new(command::ClearRecentCommand::new(cfg)),
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}

/// Log to stderr so results on stdout stay clean; each -v raises the level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
