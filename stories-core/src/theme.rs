use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Picks the light or dark half of a `"light dark:variant"` style token.
    ///
    /// Tokens without `dark:` classes are returned unchanged for both themes.
    pub fn pick(&self, token: &str) -> String {
        let (dark, light): (Vec<&str>, Vec<&str>) = token
            .split_whitespace()
            .partition(|class| class.starts_with("dark:"));

        if dark.is_empty() {
            return token.to_string();
        }

        match self {
            Theme::Light => light.join(" "),
            Theme::Dark => dark
                .iter()
                .map(|class| class.trim_start_matches("dark:"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}'. Supported themes: light, dark.")]
pub struct UnknownTheme(pub String);

impl TryFrom<&str> for Theme {
    type Error = UnknownTheme;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(value.to_string())),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::try_from(s)
    }
}
