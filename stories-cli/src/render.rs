//! Plain-text drawing of the page, optionally tinted with ANSI colors.

use chrono::{DateTime, Utc};
use crossterm::style::{Color, Stylize};
use std::fmt::Write as _;

use stories_core::{
    CityWeather, ConditionLabel, Page, PopularCity, Presentation, StoryCard, Theme,
    WeatherSnapshot, condition::Rgb,
};

const WIDTH: usize = 72;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub theme: Theme,
    pub color: bool,
}

impl Palette {
    pub fn plain(theme: Theme) -> Self {
        Self { theme, color: false }
    }

    fn tint(&self, text: &str, rgb: Rgb) -> String {
        if !self.color {
            return text.to_string();
        }
        text.with(Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }).to_string()
    }

    fn title(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let fg = match self.theme {
            Theme::Light => Color::Rgb { r: 31, g: 41, b: 55 },
            Theme::Dark => Color::White,
        };
        text.with(fg).bold().to_string()
    }

    fn muted(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let fg = match self.theme {
            Theme::Light => Color::Rgb { r: 75, g: 85, b: 99 },
            Theme::Dark => Color::Grey,
        };
        text.with(fg).to_string()
    }
}

pub fn page(page: &Page, palette: &Palette, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    header(&mut out, palette);
    popular(&mut out, page.popular, palette);
    hero(&mut out, &page.hero, palette, now);

    section(&mut out, "Featured Weather Stories", palette);
    for card in &page.stories {
        story(&mut out, card, palette);
    }

    section(&mut out, "Around the World", palette);
    for card in &page.cards {
        city_card(&mut out, card, palette);
    }

    out
}

fn header(out: &mut String, palette: &Palette) {
    // The toggle shows the theme it would switch to.
    let toggle = match palette.theme {
        Theme::Light => "[☾]",
        Theme::Dark => "[☀]",
    };
    let title = "Weather Stories";
    let pad = WIDTH.saturating_sub(title.len() + toggle.chars().count());
    let _ = writeln!(out, "{}{}{}", palette.title(title), " ".repeat(pad), toggle);
    let _ = writeln!(
        out,
        "{}",
        palette.muted("Discover the world through weather and tales")
    );
    out.push('\n');
}

fn popular(out: &mut String, cities: &[PopularCity], palette: &Palette) {
    let names: Vec<&str> = cities.iter().map(|c| c.city).collect();
    let _ = writeln!(out, "{} {}", palette.muted("Popular:"), names.join(" · "));
    out.push('\n');
}

fn hero(out: &mut String, snap: &WeatherSnapshot, palette: &Palette, now: DateTime<Utc>) {
    let p = snap.presentation();
    let rule = palette.tint(&"━".repeat(WIDTH), p.accent);

    let updated = match snap.minutes_since_update(now) {
        0 => "Updated now".to_string(),
        1 => "Updated 1 min ago".to_string(),
        n => format!("Updated {n} min ago"),
    };
    let place = format!("📍 {}", snap.location_name);
    let pad = WIDTH.saturating_sub(place.chars().count() + updated.len()).max(1);

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{}{}{}", palette.title(&place), " ".repeat(pad), palette.muted(&updated));
    let _ = writeln!(
        out,
        "  {} {}  {}",
        p.glyph,
        palette.title(&format!("{}°C", snap.temperature_c)),
        palette.tint(&snap.condition, p.accent)
    );
    for line in wrap(&snap.description, WIDTH - 2) {
        let _ = writeln!(out, "  {}", palette.muted(&line));
    }
    let _ = writeln!(
        out,
        "  Feels like {}°C   Wind {} km/h   Humidity {}%   Visibility {} km",
        snap.feels_like_c, snap.wind_speed_kmh, snap.humidity_pct, snap.visibility_km
    );
    let _ = writeln!(out, "{rule}");
}

fn section(out: &mut String, title: &str, palette: &Palette) {
    out.push('\n');
    let _ = writeln!(out, "{}", palette.title(title));
    out.push('\n');
}

fn story(out: &mut String, card: &StoryCard, palette: &Palette) {
    let story = card.story();
    let p = story.presentation();

    let _ = writeln!(
        out,
        "  {} {}°  {}, {}  {}",
        p.glyph,
        story.temperature_c,
        palette.title(&story.name),
        story.country,
        palette.tint(&story.condition, p.accent)
    );
    for line in wrap(&story.story, WIDTH - 5) {
        let _ = writeln!(out, "     {line}");
    }

    if card.is_expanded() {
        let _ = writeln!(out, "     ▾ Highlights");
        for highlight in card.visible_highlights() {
            let _ = writeln!(out, "       • {highlight}");
        }
    } else {
        let _ = writeln!(out, "     {}", palette.muted("▸ View Story"));
    }
    out.push('\n');
}

fn city_card(out: &mut String, card: &CityWeather, palette: &Palette) {
    let p = card.presentation();
    let place = format!("{}, {}", card.city, card.country);
    let _ = writeln!(
        out,
        "  {} {:<24}{:>5}°  {}",
        p.glyph,
        place,
        card.temperature_c,
        palette.tint(&card.condition, p.accent)
    );
}

pub fn suggestions(items: &[String]) -> String {
    if items.is_empty() {
        return "No suggestions.\n".to_string();
    }
    items.iter().map(|s| format!("📍 {s}\n")).collect()
}

pub fn condition(label: &str, resolved: ConditionLabel, fallback: bool, p: &Presentation, theme: Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", p.glyph, label);
    if fallback {
        let _ = writeln!(out, "  (unknown condition, shown as {resolved})");
    }
    let _ = writeln!(out, "  text color:    {}", theme.pick(p.text_color));
    let _ = writeln!(out, "  card gradient: {}", theme.pick(p.card_gradient));
    let _ = writeln!(out, "  backdrop:      {}", theme.pick(p.backdrop));
    let _ = writeln!(out, "  accent:        #{:02x}{:02x}{:02x}", p.accent.0, p.accent.1, p.accent.2);
    out
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
