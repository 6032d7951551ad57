use crate::{
    error::AppResult,
    models::{NewRating, NewRecipe, Rating, Recipe, RecipeId},
};

/// Persistence collaborator for recipes and ratings
///
/// The recommender only reads candidate pools through this trait; ratings are
/// written by the feedback endpoint and never read back by the engine.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecipeStore: Send + Sync {
    /// Loads at most `limit` recipes in id order
    async fn fetch_candidates(&self, limit: usize) -> AppResult<Vec<Recipe>>;

    async fn get_recipe(&self, id: RecipeId) -> AppResult<Option<Recipe>>;

    /// Inserts a batch of recipes, returning how many were stored
    async fn insert_recipes(&self, recipes: Vec<NewRecipe>) -> AppResult<u64>;

    async fn add_rating(&self, rating: NewRating) -> AppResult<Rating>;

    /// Store name for logging and debugging
    fn name(&self) -> &'static str;
}
