//! Static sample content for the page.

use chrono::{DateTime, Utc};

use crate::model::{CityWeather, LocationStory, PopularCity, WeatherSnapshot};

/// Reference list the search box suggests from.
pub const SUGGESTIONS: &[&str] = &[
    "Paris, France",
    "Tokyo, Japan",
    "New York, USA",
    "London, UK",
    "Sydney, Australia",
    "Dubai, UAE",
    "Mumbai, India",
    "Barcelona, Spain",
    "Cape Town, South Africa",
    "Rio de Janeiro, Brazil",
];

pub const POPULAR_CITIES: &[PopularCity] = &[
    PopularCity { city: "Tokyo", country: "Japan" },
    PopularCity { city: "Paris", country: "France" },
    PopularCity { city: "New York", country: "USA" },
    PopularCity { city: "London", country: "UK" },
    PopularCity { city: "Dubai", country: "UAE" },
];

pub fn hero(observed_at: DateTime<Utc>) -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: "San Francisco".to_string(),
        country: "USA".to_string(),
        temperature_c: 22,
        condition: "Partly Cloudy".to_string(),
        description: "A beautiful day with scattered clouds and gentle coastal breeze".to_string(),
        humidity_pct: 65,
        wind_speed_kmh: 12,
        visibility_km: 10,
        feels_like_c: 24,
        observed_at,
    }
}

fn story(
    id: u32,
    name: &str,
    country: &str,
    temperature_c: i32,
    condition: &str,
    story: &str,
    highlights: [&str; 3],
) -> LocationStory {
    LocationStory {
        id,
        name: name.to_string(),
        country: country.to_string(),
        temperature_c,
        condition: condition.to_string(),
        image: "/placeholder.svg".to_string(),
        story: story.to_string(),
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
    }
}

pub fn featured_stories() -> Vec<LocationStory> {
    vec![
        story(
            1,
            "Tokyo",
            "Japan",
            28,
            "Clear",
            "Cherry blossoms paint the city in delicate pink hues as spring temperatures bring new life to the bustling metropolis.",
            ["Shibuya Crossing", "Mount Fuji views", "Temple gardens"],
        ),
        story(
            2,
            "Reykjavik",
            "Iceland",
            5,
            "Aurora",
            "Under the dancing northern lights, the crisp Arctic air carries whispers of ancient glaciers and volcanic tales.",
            ["Northern Lights", "Blue Lagoon", "Volcanic landscapes"],
        ),
        story(
            3,
            "Santorini",
            "Greece",
            26,
            "Sunny",
            "Golden sunlight bathes white-washed buildings perched on volcanic cliffs, while Aegean breezes carry the scent of wild herbs.",
            ["Sunset views", "Volcanic beaches", "Ancient ruins"],
        ),
    ]
}

pub fn world_cards() -> Vec<CityWeather> {
    [
        ("London", "UK", 15, "Rainy"),
        ("Dubai", "UAE", 35, "Sunny"),
        ("Moscow", "Russia", -5, "Snow"),
        ("Sydney", "Australia", 23, "Clear"),
    ]
    .into_iter()
    .map(|(city, country, temperature_c, condition)| CityWeather {
        city: city.to_string(),
        country: country.to_string(),
        temperature_c,
        condition: condition.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionLabel;

    #[test]
    fn every_sample_condition_is_known() {
        let now = Utc::now();
        let mut conditions = vec![hero(now).condition];
        conditions.extend(featured_stories().into_iter().map(|s| s.condition));
        conditions.extend(world_cards().into_iter().map(|c| c.condition));

        for condition in conditions {
            assert!(
                ConditionLabel::try_from(condition.as_str()).is_ok(),
                "{condition} should have its own presentation"
            );
        }
    }

    #[test]
    fn popular_cities_are_suggestable() {
        for city in POPULAR_CITIES {
            assert!(SUGGESTIONS.contains(&city.place().as_str()));
        }
    }

    #[test]
    fn story_ids_are_unique() {
        let mut ids: Vec<u32> = featured_stories().iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
