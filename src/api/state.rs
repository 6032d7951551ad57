use std::sync::Arc;

use crate::{
    db::{InMemoryRecipeStore, RecipeStore},
    services::{
        recommender::Recommender,
        weather::{DisabledWeatherProvider, WeatherProvider},
    },
};

/// Request defaults for the recommendation endpoint
#[derive(Debug, Clone)]
pub struct RecommendSettings {
    pub default_location: String,
    pub default_top_k: usize,
    /// Upper bound on recipes loaded per request; also caps `top_k`
    pub candidate_limit: usize,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            default_location: "Delhi".to_string(),
            default_top_k: 10,
            candidate_limit: 5000,
        }
    }
}

impl RecommendSettings {
    /// Effective result size: absent or zero means the default, never above the candidate limit
    pub fn resolve_top_k(&self, requested: Option<usize>) -> usize {
        requested
            .filter(|&k| k > 0)
            .unwrap_or(self.default_top_k)
            .min(self.candidate_limit)
    }

    /// Effective location: absent or blank means the default
    pub fn resolve_location<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.default_location.as_str())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub weather: Arc<dyn WeatherProvider>,
    pub recommender: Arc<Recommender>,
    pub settings: RecommendSettings,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecipeStore>,
        weather: Arc<dyn WeatherProvider>,
        recommender: Recommender,
        settings: RecommendSettings,
    ) -> Self {
        Self {
            store,
            weather,
            recommender: Arc::new(recommender),
            settings,
        }
    }

    /// Empty in-memory store, no weather and the built-in tables
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRecipeStore::new()),
            Arc::new(DisabledWeatherProvider),
            Recommender::default(),
            RecommendSettings::default(),
        )
    }
}
