use std::{io::IsTerminal, sync::Arc};

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::json;
use stories_core::{Config, LogSink, Page, Theme, condition};

use crate::{prompt, render};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-stories",
    version,
    about = "Discover the world through weather and tales"
)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "stories_core=trace". Overrides the config file.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw the whole page (default).
    Show {
        /// Color theme, "light" or "dark". Defaults to the configured theme.
        #[arg(long)]
        theme: Option<Theme>,

        /// Expand a featured story's highlights, by id or name. Repeatable.
        #[arg(long)]
        expand: Vec<String>,

        /// Print without ANSI colors.
        #[arg(long)]
        no_color: bool,
    },

    /// List suggestions for a partial place name.
    Suggest {
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// Show how a condition label is drawn.
    Condition {
        /// Label such as "Sunny" or "Partly Cloudy" (case-sensitive).
        label: String,

        #[arg(long)]
        json: bool,
    },

    /// Search interactively, with suggestions as you type.
    Search {
        /// Pick from the popular cities instead of typing.
        #[arg(long)]
        popular: bool,
    },
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let command = self.command.unwrap_or(Command::Show {
            theme: None,
            expand: Vec::new(),
            no_color: false,
        });

        match command {
            Command::Show {
                theme,
                expand,
                no_color,
            } => show(&config, theme, &expand, no_color),
            Command::Suggest { query, json } => suggest(&config, &query, json),
            Command::Condition { label, json } => describe_condition(&config, &label, json),
            Command::Search { popular } => search(&config, popular).await,
        }
    }
}

fn sample_page(config: &Config) -> Page {
    Page::sample(config, Arc::new(LogSink), Utc::now())
}

fn show(config: &Config, theme: Option<Theme>, expand: &[String], no_color: bool) -> anyhow::Result<()> {
    let mut page = sample_page(config);
    if let Some(theme) = theme {
        page.theme = theme;
    }

    for key in expand {
        if !page.toggle_story(key) {
            tracing::warn!(story = %key, "no featured story matches");
        }
    }

    let palette = render::Palette {
        theme: page.theme,
        color: !no_color && std::io::stdout().is_terminal(),
    };
    print!("{}", render::page(&page, &palette, Utc::now()));
    Ok(())
}

fn suggest(config: &Config, query: &str, as_json: bool) -> anyhow::Result<()> {
    let page = sample_page(config);
    let matches = page.search.filter().filter(query);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        print!("{}", render::suggestions(&matches));
    }
    Ok(())
}

fn describe_condition(config: &Config, label: &str, as_json: bool) -> anyhow::Result<()> {
    let (resolved, fallback) = condition::resolve(label);
    let presentation = resolved.presentation();

    if as_json {
        let value = json!({
            "label": label,
            "resolved": resolved.as_str(),
            "fallback": fallback,
            "presentation": presentation,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!(
            "{}",
            render::condition(label, resolved, fallback, presentation, config.theme)
        );
    }
    Ok(())
}

async fn search(config: &Config, popular: bool) -> anyhow::Result<()> {
    let page = sample_page(config);
    let bar = &page.search;

    if popular {
        match prompt::ask_popular(page.popular)? {
            Some(city) => bar.select_popular(city),
            None => println!("Search cancelled."),
        }
        return Ok(());
    }

    let Some(answer) = prompt::ask_place(bar)? else {
        println!("Search cancelled.");
        return Ok(());
    };

    // An exact suggestion counts as a click on it; anything else is a submit.
    if bar.filter().candidates().iter().any(|c| *c == answer) {
        bar.select_suggestion(&answer);
        return Ok(());
    }

    bar.input(&answer);
    match bar.submit() {
        Some(handle) => {
            println!("Searching for {}...", answer.trim());
            handle.await?;
        }
        None => println!("Nothing to search for."),
    }
    Ok(())
}
