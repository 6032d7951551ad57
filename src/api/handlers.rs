use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{
        rating::{MAX_RATING, MIN_RATING},
        NewRating, Rating, RecipeDetail, RecipeId, RecommendationItem, Region, WeatherSnapshot,
        WeatherTag,
    },
    services::recommendations,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Default, Deserialize)]
pub struct RecommendQuery {
    pub location: Option<String>,
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub weather: Option<WeatherSnapshot>,
    pub region: Option<Region>,
    pub weather_tag: WeatherTag,
    pub recommendations: Vec<RecommendationItem>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Weather- and region-aware recommendations for a location
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendQuery>,
) -> Json<RecommendResponse> {
    let location = state.settings.resolve_location(query.location.as_deref());
    let top_k = state.settings.resolve_top_k(query.top_k);

    tracing::info!(
        request_id = %request_id,
        location = %location,
        top_k,
        "Recommendation request"
    );

    let outcome = recommendations::get_recommendations(
        state.store.as_ref(),
        state.weather.as_ref(),
        state.recommender.clone(),
        location,
        state.settings.candidate_limit,
        top_k,
    )
    .await;

    Json(RecommendResponse {
        weather: outcome.weather,
        region: outcome.recommendations.region,
        weather_tag: outcome.recommendations.weather_tag,
        recommendations: outcome.recommendations.items,
    })
}

/// Full detail for one recipe
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> AppResult<Json<RecipeDetail>> {
    let recipe = state
        .store
        .get_recipe(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", id)))?;

    Ok(Json(RecipeDetail::from(&recipe)))
}

/// Stores a user's rating of a recipe
pub async fn submit_feedback(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(payload): Json<NewRating>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    if !payload.is_in_range() {
        return Err(AppError::InvalidInput(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }

    if state.store.get_recipe(payload.recipe_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Recipe {} not found",
            payload.recipe_id
        )));
    }

    let rating = state.store.add_rating(payload).await?;

    tracing::info!(
        request_id = %request_id,
        user_id = rating.user_id,
        recipe_id = rating.recipe_id,
        rating = rating.rating,
        "Feedback recorded"
    );

    Ok((StatusCode::CREATED, Json(rating)))
}
