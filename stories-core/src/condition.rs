use serde::Serialize;
use std::{convert::TryFrom, fmt};

/// Closed set of weather conditions the page knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConditionLabel {
    Clear,
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Aurora,
    Snow,
}

/// Label whose presentation is used for anything unrecognized.
pub const FALLBACK: ConditionLabel = ConditionLabel::Clear;

impl ConditionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionLabel::Clear => "Clear",
            ConditionLabel::Sunny => "Sunny",
            ConditionLabel::PartlyCloudy => "Partly Cloudy",
            ConditionLabel::Cloudy => "Cloudy",
            ConditionLabel::Rainy => "Rainy",
            ConditionLabel::Aurora => "Aurora",
            ConditionLabel::Snow => "Snow",
        }
    }

    pub const fn all() -> &'static [ConditionLabel] {
        &[
            ConditionLabel::Clear,
            ConditionLabel::Sunny,
            ConditionLabel::PartlyCloudy,
            ConditionLabel::Cloudy,
            ConditionLabel::Rainy,
            ConditionLabel::Aurora,
            ConditionLabel::Snow,
        ]
    }

    /// Exact, case-sensitive match against the display labels.
    pub fn lookup(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == label)
    }

    pub fn presentation(&self) -> &'static Presentation {
        match self {
            ConditionLabel::Clear => &CLEAR,
            ConditionLabel::Sunny => &SUNNY,
            ConditionLabel::PartlyCloudy => &PARTLY_CLOUDY,
            ConditionLabel::Cloudy => &CLOUDY,
            ConditionLabel::Rainy => &RAINY,
            ConditionLabel::Aurora => &AURORA,
            ConditionLabel::Snow => &SNOW,
        }
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown weather condition '{0}'. Known conditions: Clear, Sunny, Partly Cloudy, Cloudy, Rainy, Aurora, Snow.")]
pub struct UnknownCondition(pub String);

impl TryFrom<&str> for ConditionLabel {
    type Error = UnknownCondition;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::lookup(value).ok_or_else(|| UnknownCondition(value.to_string()))
    }
}

/// RGB triple used when drawing a condition in a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Everything a caller needs to draw one condition.
///
/// The hero panel, the story cards and the world cards all read from this one
/// table; they differ only in which token they pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub glyph: &'static str,
    /// Flat text color, light then dark variant.
    pub text_color: &'static str,
    /// Two-stop gradient for compact cards.
    pub card_gradient: &'static str,
    /// Three-stop page background, light then dark variant.
    pub backdrop: &'static str,
    pub accent: Rgb,
}

static CLEAR: Presentation = Presentation {
    glyph: "☀️",
    text_color: "text-blue-600 dark:text-blue-400",
    card_gradient: "from-blue-400 to-blue-600",
    backdrop: "from-blue-400 via-blue-500 to-blue-600 dark:from-blue-600 dark:via-blue-700 dark:to-blue-800",
    accent: Rgb(59, 130, 246),
};

static SUNNY: Presentation = Presentation {
    glyph: "🌞",
    text_color: "text-yellow-600 dark:text-yellow-400",
    card_gradient: "from-yellow-400 to-orange-500",
    backdrop: "from-yellow-400 via-orange-400 to-red-400 dark:from-yellow-600 dark:via-orange-600 dark:to-red-600",
    accent: Rgb(251, 146, 60),
};

static PARTLY_CLOUDY: Presentation = Presentation {
    glyph: "⛅",
    text_color: "text-gray-600 dark:text-gray-400",
    card_gradient: "from-gray-300 to-blue-400",
    backdrop: "from-blue-300 via-gray-100 to-gray-200 dark:from-slate-700 dark:via-slate-800 dark:to-slate-900",
    accent: Rgb(156, 163, 175),
};

static CLOUDY: Presentation = Presentation {
    glyph: "☁️",
    text_color: "text-gray-700 dark:text-gray-300",
    card_gradient: "from-gray-400 to-gray-600",
    backdrop: "from-gray-300 via-gray-400 to-gray-500 dark:from-gray-600 dark:via-gray-700 dark:to-gray-800",
    accent: Rgb(107, 114, 128),
};

static RAINY: Presentation = Presentation {
    glyph: "🌧️",
    text_color: "text-blue-800 dark:text-blue-300",
    card_gradient: "from-gray-600 to-blue-700",
    backdrop: "from-gray-500 via-blue-600 to-gray-700 dark:from-gray-800 dark:via-blue-900 dark:to-gray-900",
    accent: Rgb(29, 78, 216),
};

static AURORA: Presentation = Presentation {
    glyph: "🌌",
    text_color: "text-purple-600 dark:text-purple-400",
    card_gradient: "from-green-400 to-purple-600",
    backdrop: "from-green-400 via-purple-500 to-blue-600 dark:from-green-600 dark:via-purple-700 dark:to-blue-800",
    accent: Rgb(168, 85, 247),
};

static SNOW: Presentation = Presentation {
    glyph: "❄️",
    text_color: "text-blue-400 dark:text-blue-200",
    card_gradient: "from-blue-200 to-gray-300",
    backdrop: "from-blue-100 via-gray-50 to-gray-100 dark:from-slate-600 dark:via-slate-700 dark:to-slate-800",
    accent: Rgb(191, 219, 254),
};

/// Presentation for a free-form condition label.
///
/// Unknown labels silently get the `Clear` entry, so rendering never stalls
/// on bad sample data. Use [`ConditionLabel::try_from`] to detect it instead.
pub fn present(condition: &str) -> &'static Presentation {
    ConditionLabel::lookup(condition)
        .unwrap_or(FALLBACK)
        .presentation()
}

/// Like [`present`], but also reports whether the fallback was taken.
pub fn resolve(condition: &str) -> (ConditionLabel, bool) {
    match ConditionLabel::lookup(condition) {
        Some(label) => (label, false),
        None => {
            tracing::debug!(condition, "unknown condition, using fallback presentation");
            (FALLBACK, true)
        }
    }
}
