use serde::Deserialize;

pub mod rating;
pub mod recipe;
pub mod recommendation;
pub mod weather;

pub use rating::{NewRating, Rating};
pub use recipe::{normalize_text, parse_tags, NewRecipe, Recipe, RecipeDetail, RecipeId};
pub use recommendation::{Category, RecommendationItem, Recommendations};
pub use weather::{Region, WeatherSnapshot, WeatherTag};

// ============================================================================
// OpenWeatherMap API Types
// ============================================================================

/// Raw response from GET /data/2.5/weather
#[derive(Debug, Clone, Deserialize)]
pub struct OwmCurrentWeather {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weather: Vec<OwmCondition>,
    #[serde(default)]
    pub main: Option<OwmMain>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmCondition {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwmMain {
    #[serde(default, deserialize_with = "weather::lenient_temperature")]
    pub temp: Option<f64>,
}

impl OwmCurrentWeather {
    /// Converts the API payload, falling back to the queried location and an
    /// "Unknown" condition when the payload omits them
    pub fn into_snapshot(self, queried_location: &str) -> WeatherSnapshot {
        let location = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| queried_location.to_string());

        let condition = self
            .weather
            .into_iter()
            .next()
            .map(|c| c.main)
            .unwrap_or_else(|| "Unknown".to_string());

        WeatherSnapshot {
            location,
            condition: Some(condition),
            temp: self.main.and_then(|m| m.temp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owm_payload_to_snapshot() {
        let payload: OwmCurrentWeather = serde_json::from_str(
            r#"{
                "name": "Kochi",
                "weather": [{"main": "Rain", "description": "light rain"}],
                "main": {"temp": 24.3, "humidity": 88}
            }"#,
        )
        .unwrap();

        let snapshot = payload.into_snapshot("kochi");
        assert_eq!(snapshot.location, "Kochi");
        assert_eq!(snapshot.condition.as_deref(), Some("Rain"));
        assert_eq!(snapshot.temp, Some(24.3));
    }

    #[test]
    fn test_owm_payload_with_missing_fields() {
        let payload: OwmCurrentWeather = serde_json::from_str(r#"{"name": ""}"#).unwrap();

        let snapshot = payload.into_snapshot("Shimla");
        assert_eq!(snapshot.location, "Shimla");
        assert_eq!(snapshot.condition.as_deref(), Some("Unknown"));
        assert_eq!(snapshot.temp, None);
    }

    #[test]
    fn test_owm_string_temperature_is_parsed() {
        let payload: OwmCurrentWeather = serde_json::from_str(
            r#"{"name": "Jaipur", "weather": [{"main": "Clear"}], "main": {"temp": "34.5"}}"#,
        )
        .unwrap();

        assert_eq!(payload.into_snapshot("Jaipur").temp, Some(34.5));
    }
}
