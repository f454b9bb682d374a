use inquire::{
    Autocomplete, CustomUserError, InquireError, Select, Text, autocompletion::Replacement,
};
use stories_core::{PopularCity, SearchBar};

/// Feeds inquire's autocomplete from the search bar's dropdown.
#[derive(Clone)]
pub struct CityCompleter {
    bar: SearchBar,
}

impl CityCompleter {
    pub fn new(bar: SearchBar) -> Self {
        Self { bar }
    }
}

impl Autocomplete for CityCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        self.bar.input(input);
        Ok(self.bar.visible_suggestions())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion)
    }
}

/// Asks for a place; `None` if the user backed out.
pub fn ask_place(bar: &SearchBar) -> anyhow::Result<Option<String>> {
    bar.focus();
    let answer = Text::new("Search:")
        .with_placeholder("Search for cities, countries, or places...")
        .with_autocomplete(CityCompleter::new(bar.clone()))
        .prompt();
    bar.blur();

    cancelled_as_none(answer)
}

pub fn ask_popular(cities: &'static [PopularCity]) -> anyhow::Result<Option<&'static PopularCity>> {
    let names: Vec<&str> = cities.iter().map(|c| c.city).collect();
    let answer = Select::new("Popular cities:", names).prompt();

    Ok(cancelled_as_none(answer)?.and_then(|name| cities.iter().find(|c| c.city == name)))
}

fn cancelled_as_none<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
