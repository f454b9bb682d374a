//! Search box state: query text, suggestion dropdown, and the simulated search.
//!
//! A [`SearchBar`] is cheap to clone; clones share one state. Timers started by
//! [`SearchBar::submit`] and [`SearchBar::blur`] are detached tokio tasks that
//! are never cancelled, so both must be called from inside a tokio runtime.

use parking_lot::Mutex;
use std::{fmt, sync::Arc, time::Duration};
use tokio::task::JoinHandle;

use crate::{
    model::PopularCity,
    suggest::{MIN_QUERY_CHARS, SuggestionFilter},
};

/// Receives every location the search box settles on.
pub trait LocationSink: Send + Sync {
    fn notify_selection(&self, location: &str);
}

/// Sink that only records the selection in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl LocationSink for LogSink {
    fn notify_selection(&self, location: &str) {
        tracing::info!("Selected: {location}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTimings {
    /// How long the "searching" indicator stays on after a submit.
    pub search_delay: Duration,
    /// How long the dropdown lingers after the input loses focus.
    pub blur_delay: Duration,
}

impl Default for SearchTimings {
    fn default() -> Self {
        Self {
            search_delay: Duration::from_millis(1000),
            blur_delay: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Default)]
struct SearchState {
    query: String,
    suggestions: Vec<String>,
    show_suggestions: bool,
    searching: bool,
}

#[derive(Clone)]
pub struct SearchBar {
    filter: SuggestionFilter,
    sink: Arc<dyn LocationSink>,
    timings: SearchTimings,
    state: Arc<Mutex<SearchState>>,
}

impl fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBar")
            .field("timings", &self.timings)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl SearchBar {
    pub fn new(filter: SuggestionFilter, sink: Arc<dyn LocationSink>) -> Self {
        Self {
            filter,
            sink,
            timings: SearchTimings::default(),
            state: Arc::default(),
        }
    }

    pub fn with_timings(mut self, timings: SearchTimings) -> Self {
        self.timings = timings;
        self
    }

    pub fn filter(&self) -> &SuggestionFilter {
        &self.filter
    }

    pub fn query(&self) -> String {
        self.state.lock().query.clone()
    }

    pub fn is_searching(&self) -> bool {
        self.state.lock().searching
    }

    pub fn is_showing_suggestions(&self) -> bool {
        self.state.lock().show_suggestions
    }

    /// What the dropdown currently lists; empty when it is hidden.
    pub fn visible_suggestions(&self) -> Vec<String> {
        let state = self.state.lock();
        if state.show_suggestions {
            state.suggestions.clone()
        } else {
            Vec::new()
        }
    }

    /// Keystroke handler: replaces the query and refreshes the dropdown.
    pub fn input(&self, text: &str) {
        let long_enough = text.chars().count() >= MIN_QUERY_CHARS;
        let suggestions = long_enough.then(|| self.filter.filter(text));

        let mut state = self.state.lock();
        state.query = text.to_string();
        // A short query hides the dropdown but keeps the last list around.
        if let Some(suggestions) = suggestions {
            state.suggestions = suggestions;
        }
        state.show_suggestions = long_enough;
    }

    pub fn focus(&self) {
        let mut state = self.state.lock();
        if state.query.chars().count() >= MIN_QUERY_CHARS {
            state.show_suggestions = true;
        }
    }

    /// Hides the dropdown once the blur delay has passed.
    pub fn blur(&self) -> JoinHandle<()> {
        let state = Arc::clone(&self.state);
        let delay = self.timings.blur_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.lock().show_suggestions = false;
        })
    }

    /// Takes `suggestion` as the query, closes the dropdown and forwards it verbatim.
    pub fn select_suggestion(&self, suggestion: &str) {
        {
            let mut state = self.state.lock();
            state.query = suggestion.to_string();
            state.show_suggestions = false;
        }
        self.sink.notify_selection(suggestion);
    }

    pub fn select_popular(&self, city: &PopularCity) {
        self.select_suggestion(&city.place());
    }

    /// Starts a simulated search for the current query.
    ///
    /// Blank queries are ignored and return `None`. Otherwise the indicator
    /// turns on now and an independent timer turns it off, closes the dropdown
    /// and forwards the trimmed query. Overlapping submits each run to the end;
    /// whichever timer fires last decides the final state.
    pub fn submit(&self) -> Option<JoinHandle<()>> {
        let location = {
            let mut state = self.state.lock();
            let trimmed = state.query.trim();
            if trimmed.is_empty() {
                return None;
            }
            let location = trimmed.to_string();
            state.searching = true;
            location
        };

        tracing::debug!(%location, delay_ms = self.timings.search_delay.as_millis() as u64, "search started");

        let state = Arc::clone(&self.state);
        let sink = Arc::clone(&self.sink);
        let delay = self.timings.search_delay;

        Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut state = state.lock();
                state.searching = false;
                state.show_suggestions = false;
            }
            sink.notify_selection(&location);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<String>>);

    impl RecordingSink {
        fn seen(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    impl LocationSink for RecordingSink {
        fn notify_selection(&self, location: &str) {
            self.0.lock().push(location.to_string());
        }
    }

    fn bar() -> (SearchBar, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let filter = SuggestionFilter::new(catalog::SUGGESTIONS.iter().copied());
        (SearchBar::new(filter, sink.clone()), sink)
    }

    #[test]
    fn typing_opens_and_closes_dropdown() {
        let (bar, _) = bar();

        bar.input("t");
        assert!(!bar.is_showing_suggestions());
        assert!(bar.visible_suggestions().is_empty());

        bar.input("to");
        assert!(bar.is_showing_suggestions());
        assert!(bar.visible_suggestions().contains(&"Tokyo, Japan".to_string()));

        bar.input("t");
        assert!(bar.visible_suggestions().is_empty());
        assert_eq!(bar.query(), "t");
    }

    #[test]
    fn no_match_shows_nothing() {
        let (bar, _) = bar();
        bar.input("zz");
        assert!(bar.visible_suggestions().is_empty());
    }

    #[test]
    fn focus_reopens_only_for_long_queries() {
        let (bar, _) = bar();
        bar.input("Lon");
        bar.select_suggestion("London, UK");
        assert!(!bar.is_showing_suggestions());

        bar.focus();
        assert!(bar.is_showing_suggestions());

        bar.input("L");
        bar.focus();
        assert!(!bar.is_showing_suggestions());
    }

    #[test]
    fn selecting_forwards_exact_text_and_hides_list() {
        let (bar, sink) = bar();
        bar.input("york");
        assert!(bar.is_showing_suggestions());

        bar.select_suggestion("New York, USA");

        assert!(!bar.is_showing_suggestions());
        assert_eq!(bar.query(), "New York, USA");
        assert_eq!(sink.seen(), vec!["New York, USA"]);
    }

    #[test]
    fn popular_city_forwards_city_and_country() {
        let (bar, sink) = bar();
        bar.select_popular(&catalog::POPULAR_CITIES[4]);
        assert_eq!(sink.seen(), vec!["Dubai, UAE"]);
        assert_eq!(bar.query(), "Dubai, UAE");
    }

    #[tokio::test(start_paused = true)]
    async fn blank_submit_is_ignored() {
        let (bar, sink) = bar();

        assert!(bar.submit().is_none());
        bar.input("   \t ");
        assert!(bar.submit().is_none());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!bar.is_searching());
        assert!(sink.seen().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_forwards_trimmed_query_after_delay() {
        let (bar, sink) = bar();
        bar.input("  Reykjavik, Iceland ");

        let handle = bar.submit().expect("non-blank query submits");
        assert!(bar.is_searching());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(bar.is_searching());
        assert!(sink.seen().is_empty());

        handle.await.expect("search timer task");
        assert!(!bar.is_searching());
        assert!(!bar.is_showing_suggestions());
        assert_eq!(sink.seen(), vec!["Reykjavik, Iceland"]);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_submits_all_complete() {
        let (bar, sink) = bar();

        bar.input("Paris");
        let first = bar.submit().expect("first submit");
        tokio::time::sleep(Duration::from_millis(300)).await;

        bar.input("Tokyo");
        let second = bar.submit().expect("second submit");

        tokio::time::sleep(Duration::from_millis(800)).await;
        // First timer has fired; its clear wins until the second lands.
        assert!(!bar.is_searching());
        assert_eq!(sink.seen(), vec!["Paris"]);

        first.await.expect("first timer");
        second.await.expect("second timer");
        assert!(!bar.is_searching());
        assert_eq!(sink.seen(), vec!["Paris", "Tokyo"]);
    }

    #[tokio::test(start_paused = true)]
    async fn blur_hides_after_delay() {
        let (bar, _) = bar();
        bar.input("an");
        assert!(bar.is_showing_suggestions());

        let handle = bar.blur();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(bar.is_showing_suggestions());

        handle.await.expect("blur timer");
        assert!(!bar.is_showing_suggestions());
    }

    #[tokio::test(start_paused = true)]
    async fn custom_timings_are_used() {
        let (bar, sink) = bar();
        let bar = bar.with_timings(SearchTimings {
            search_delay: Duration::from_millis(50),
            blur_delay: Duration::from_millis(10),
        });

        bar.input("Dubai");
        let handle = bar.submit().expect("submit");
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!bar.is_searching());
        assert_eq!(sink.seen(), vec!["Dubai"]);
        handle.await.expect("timer");
    }
}
