//! Core library for the Weather Stories showcase.
//!
//! This crate defines:
//! - The shared condition → glyph/style table
//! - Suggestion filtering and the search box state
//! - Story cards, theme flag and the sample catalog
//! - Optional configuration
//!
//! It is used by `stories-cli`, which draws the page in a terminal.

pub mod catalog;
pub mod condition;
pub mod config;
pub mod model;
pub mod page;
pub mod search;
pub mod story;
pub mod suggest;
pub mod theme;

pub use condition::{ConditionLabel, Presentation, present};
pub use config::Config;
pub use model::{CityWeather, LocationStory, PopularCity, WeatherSnapshot};
pub use page::Page;
pub use search::{LocationSink, LogSink, SearchBar, SearchTimings};
pub use story::StoryCard;
pub use suggest::{SuggestionFilter, filter_suggestions};
pub use theme::Theme;
