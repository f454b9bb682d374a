use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    catalog,
    config::Config,
    model::{CityWeather, PopularCity, WeatherSnapshot},
    search::{LocationSink, SearchBar},
    story::StoryCard,
    suggest::SuggestionFilter,
    theme::Theme,
};

/// Everything the single page shows, wired from the sample catalog.
#[derive(Debug)]
pub struct Page {
    pub theme: Theme,
    pub hero: WeatherSnapshot,
    pub search: SearchBar,
    pub popular: &'static [PopularCity],
    pub stories: Vec<StoryCard>,
    pub cards: Vec<CityWeather>,
}

impl Page {
    pub fn sample(config: &Config, sink: Arc<dyn LocationSink>, now: DateTime<Utc>) -> Self {
        let filter = SuggestionFilter::new(catalog::SUGGESTIONS.iter().copied());

        Self {
            theme: config.theme,
            hero: catalog::hero(now),
            search: SearchBar::new(filter, sink).with_timings(config.timings()),
            popular: catalog::POPULAR_CITIES,
            stories: catalog::featured_stories()
                .into_iter()
                .map(StoryCard::new)
                .collect(),
            cards: catalog::world_cards(),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    /// Toggles the story whose id or name is `key`; false if none matched.
    pub fn toggle_story(&mut self, key: &str) -> bool {
        match self.stories.iter_mut().find(|card| card.matches(key)) {
            Some(card) => {
                card.toggle();
                true
            }
            None => false,
        }
    }
}
