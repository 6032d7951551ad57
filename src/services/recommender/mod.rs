//! Weather- and region-aware recipe recommendation engine.
//!
//! A request derives a [`Region`] from the snapshot's location and a
//! [`WeatherTag`] from its condition and temperature, picks the boost table for
//! that tag, scores every candidate and hands the ranking to the
//! [`BalancedSelector`]. The engine is synchronous and keeps no state between
//! requests; the only nondeterminism is the per-score jitter.

pub mod category;
pub mod region;
pub mod scoring;
pub mod selector;
pub mod tables;
pub mod text;
pub mod weather_tag;

pub use category::CategoryClassifier;
pub use region::RegionClassifier;
pub use scoring::{FixedJitter, Jitter, RandomJitter, ScoreError, ScoringEngine};
pub use selector::{BalancedSelector, ScoredCandidate};
pub use tables::{RecommenderTables, TablesError};
pub use text::RecipeText;

use crate::models::{Recipe, Recommendations, Region, WeatherSnapshot, WeatherTag};

/// Recommendation engine bound to one set of keyword tables
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    tables: RecommenderTables,
}

impl Recommender {
    pub fn new(tables: RecommenderTables) -> Self {
        Self { tables }
    }

    /// Region and weather tag for a snapshot; a missing snapshot is neutral
    pub fn signals(&self, weather: Option<&WeatherSnapshot>) -> (Option<Region>, WeatherTag) {
        let location = weather.map(|w| w.location.as_str()).unwrap_or_default();
        let region =
            RegionClassifier::new(&self.tables.regions, &self.tables.region_aliases).classify(location);
        (region, weather_tag::classify(weather))
    }

    /// Recommends up to `top_k` recipes with fresh random tie-breaks
    pub fn recommend(
        &self,
        pool: &[Recipe],
        weather: Option<&WeatherSnapshot>,
        top_k: usize,
    ) -> Recommendations {
        self.recommend_with(pool, weather, top_k, &mut RandomJitter::from_entropy())
    }

    /// Same as [`Recommender::recommend`] with a caller-supplied jitter source
    pub fn recommend_with(
        &self,
        pool: &[Recipe],
        weather: Option<&WeatherSnapshot>,
        top_k: usize,
        jitter: &mut dyn Jitter,
    ) -> Recommendations {
        let (region, weather_tag) = self.signals(weather);

        tracing::info!(
            location = weather.map(|w| w.location.as_str()).unwrap_or_default(),
            region = ?region,
            weather_tag = %weather_tag,
            candidates = pool.len(),
            top_k,
            quota = self.tables.total_target(),
            "Recommender signals"
        );

        let selector = BalancedSelector::new(
            CategoryClassifier::new(&self.tables.categories, &self.tables.title_fallbacks),
            ScoringEngine::new(region, weather_tag, self.tables.boosts.for_weather(weather_tag)),
            &self.tables.target_counts,
        );
        let items = selector.select(pool, top_k, jitter);

        tracing::info!(
            returned = items.len(),
            region = ?region,
            weather_tag = %weather_tag,
            "Returning recommendations"
        );

        Recommendations {
            region,
            weather_tag,
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn recipe(id: i64, title: &str, tags: &str) -> Recipe {
        Recipe {
            id,
            title: title.to_string(),
            ingredients: None,
            instructions: None,
            prep_time_minutes: None,
            tags: Some(tags.to_string()),
            nutrition: None,
            servings: None,
        }
    }

    #[test]
    fn test_kochi_rain_signals() {
        let recommender = Recommender::default();
        let snapshot = WeatherSnapshot::new("Kochi", Some("Rain"), Some(24.0));
        assert_eq!(
            recommender.signals(Some(&snapshot)),
            (Some(Region::South), WeatherTag::Rainy)
        );
    }

    #[test]
    fn test_missing_weather_is_neutral() {
        let recommender = Recommender::default();
        assert_eq!(recommender.signals(None), (None, WeatherTag::All));

        let result = recommender.recommend(&[recipe(1, "Dal Makhani", "north")], None, 5);
        assert_eq!(result.region, None);
        assert_eq!(result.weather_tag, WeatherTag::All);
        assert_eq!(result.items.len(), 1);
    }

    #[test]
    fn test_empty_pool() {
        let recommender = Recommender::default();
        let snapshot = WeatherSnapshot::new("Delhi", Some("Clear"), Some(35.0));
        let result = recommender.recommend(&[], Some(&snapshot), 10);
        assert_eq!(result.weather_tag, WeatherTag::Hot);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_kochi_rain_end_to_end() {
        let recommender = Recommender::default();
        let snapshot = WeatherSnapshot::new("Kochi", Some("Rain"), Some(24.0));
        let pool = vec![
            recipe(1, "Kerala Fish Curry", "south,curry"),
            recipe(2, "Masala Chai", "drink,rainy"),
            recipe(3, "Tomato Rasam", "south,soup"),
            recipe(4, "Gajar Halwa", "north,dessert"),
            recipe(5, "Onion Pakora", "snack,rainy"),
        ];

        let result = recommender.recommend_with(&pool, Some(&snapshot), 5, &mut FixedJitter(0.0));

        let categories: Vec<Category> = result.items.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Food,
                Category::Drinks,
                Category::Soups,
                Category::Desserts,
                Category::Snacks
            ]
        );
        assert_eq!(result.items[0].score, 48.0);
    }
}
