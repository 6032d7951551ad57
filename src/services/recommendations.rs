use std::sync::Arc;

use crate::{
    db::RecipeStore,
    models::{Recommendations, WeatherSnapshot},
    services::{
        recommender::Recommender,
        weather::{self, WeatherProvider},
    },
};

/// Weather lookup and engine output for one request
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationOutcome {
    pub weather: Option<WeatherSnapshot>,
    pub recommendations: Recommendations,
}

/// Generates weather- and region-aware recommendations for a location
///
/// Loads at most `candidate_limit` recipes and the current weather
/// concurrently, then runs the engine on the blocking pool. Neither
/// collaborator can fail the request: a weather failure means no weather
/// signal and a pool failure means an empty pool.
pub async fn get_recommendations(
    store: &dyn RecipeStore,
    weather_provider: &dyn WeatherProvider,
    recommender: Arc<Recommender>,
    location: &str,
    candidate_limit: usize,
    top_k: usize,
) -> RecommendationOutcome {
    let (pool, weather) = tokio::join!(
        store.fetch_candidates(candidate_limit),
        weather::current_weather(weather_provider, location)
    );

    let pool = pool.unwrap_or_else(|e| {
        tracing::error!(
            store = store.name(),
            error = %e,
            "Failed to load candidate recipes, recommending from an empty pool"
        );
        Vec::new()
    });

    let engine = Arc::clone(&recommender);
    let snapshot = weather.clone();
    let recommendations = tokio::task::spawn_blocking(move || {
        engine.recommend(&pool, snapshot.as_ref(), top_k)
    })
    .await
    .unwrap_or_else(|e| {
        tracing::error!(error = %e, "Recommendation task failed");
        let (region, weather_tag) = recommender.signals(weather.as_ref());
        Recommendations::empty(region, weather_tag)
    });

    RecommendationOutcome {
        weather,
        recommendations,
    }
}
