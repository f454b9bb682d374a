//! Binary crate for the `weather-stories` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive search with suggestions
//! - Drawing the page in the terminal

use clap::Parser;
use stories_core::Config;

mod cli;
mod logging;
mod prompt;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    let config = Config::load()?;

    let level = cmd.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    logging::init(&level)?;

    cmd.run(config).await
}
