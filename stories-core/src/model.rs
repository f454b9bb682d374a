use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::condition::{self, Presentation};

/// Current conditions shown in the hero panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: String,
    pub temperature_c: i32,
    pub condition: String,
    pub description: String,
    pub humidity_pct: u8,
    pub wind_speed_kmh: u32,
    pub visibility_km: u32,
    pub feels_like_c: i32,
    pub observed_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    pub fn presentation(&self) -> &'static Presentation {
        condition::present(&self.condition)
    }

    /// Whole minutes between the observation and `now`, never negative.
    pub fn minutes_since_update(&self, now: DateTime<Utc>) -> i64 {
        (now - self.observed_at).num_minutes().max(0)
    }
}

/// A featured place with a short narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationStory {
    pub id: u32,
    pub name: String,
    pub country: String,
    pub temperature_c: i32,
    pub condition: String,
    pub image: String,
    pub story: String,
    pub highlights: Vec<String>,
}

impl LocationStory {
    pub fn presentation(&self) -> &'static Presentation {
        condition::present(&self.condition)
    }
}

/// One tile of the "Around the World" grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityWeather {
    pub city: String,
    pub country: String,
    pub temperature_c: i32,
    pub condition: String,
}

impl CityWeather {
    pub fn presentation(&self) -> &'static Presentation {
        condition::present(&self.condition)
    }
}

/// Quick-select city offered under the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopularCity {
    pub city: &'static str,
    pub country: &'static str,
}

impl PopularCity {
    /// The `"City, Country"` text forwarded when the city is picked.
    pub fn place(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn popular_city_place_text() {
        let city = PopularCity { city: "New York", country: "USA" };
        assert_eq!(city.place(), "New York, USA");
    }

    #[test]
    fn minutes_since_update_clamps_future_observations() {
        let now = Utc::now();
        let mut snap = crate::catalog::hero(now);
        assert_eq!(snap.minutes_since_update(now), 0);

        snap.observed_at = now - Duration::minutes(7);
        assert_eq!(snap.minutes_since_update(now), 7);

        snap.observed_at = now + Duration::minutes(3);
        assert_eq!(snap.minutes_since_update(now), 0);
    }

    #[test]
    fn unknown_card_condition_renders_as_clear() {
        let card = CityWeather {
            city: "Atlantis".into(),
            country: "Ocean".into(),
            temperature_c: 12,
            condition: "Underwater".into(),
        };
        assert_eq!(card.presentation(), crate::condition::present("Clear"));
    }
}
