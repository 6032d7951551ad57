use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    db::RecipeStore,
    error::{AppError, AppResult},
    models::{NewRating, NewRecipe, Rating, Recipe, RecipeId},
};

/// In-process recipe store for tests and local runs without Postgres
#[derive(Default)]
pub struct InMemoryRecipeStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    recipes: BTreeMap<RecipeId, Recipe>,
    ratings: Vec<Rating>,
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with recipes that already carry ids
    pub fn with_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Self {
        let recipes = recipes.into_iter().map(|r| (r.id, r)).collect();
        Self {
            inner: RwLock::new(MemoryInner {
                recipes,
                ratings: Vec::new(),
            }),
        }
    }

    /// Snapshot of every stored rating
    pub async fn ratings(&self) -> Vec<Rating> {
        self.inner.read().await.ratings.clone()
    }
}

#[async_trait::async_trait]
impl RecipeStore for InMemoryRecipeStore {
    async fn fetch_candidates(&self, limit: usize) -> AppResult<Vec<Recipe>> {
        let inner = self.inner.read().await;
        Ok(inner.recipes.values().take(limit).cloned().collect())
    }

    async fn get_recipe(&self, id: RecipeId) -> AppResult<Option<Recipe>> {
        Ok(self.inner.read().await.recipes.get(&id).cloned())
    }

    async fn insert_recipes(&self, recipes: Vec<NewRecipe>) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let mut next_id = inner.recipes.keys().next_back().copied().unwrap_or(0) + 1;
        let mut inserted = 0;

        for recipe in recipes {
            inner.recipes.insert(next_id, recipe.with_id(next_id));
            next_id += 1;
            inserted += 1;
        }

        Ok(inserted)
    }

    async fn add_rating(&self, rating: NewRating) -> AppResult<Rating> {
        let mut inner = self.inner.write().await;

        if !inner.recipes.contains_key(&rating.recipe_id) {
            return Err(AppError::NotFound(format!(
                "Recipe {} not found",
                rating.recipe_id
            )));
        }

        let stored = Rating {
            id: inner.ratings.len() as i64 + 1,
            user_id: rating.user_id,
            recipe_id: rating.recipe_id,
            rating: rating.rating,
            comment: rating.comment,
            created_at: Utc::now(),
        };
        inner.ratings.push(stored.clone());

        Ok(stored)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_recipe(title: &str) -> NewRecipe {
        NewRecipe {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryRecipeStore::new();
        let inserted = store
            .insert_recipes(vec![new_recipe("Poha"), new_recipe("Upma")])
            .await
            .unwrap();
        assert_eq!(inserted, 2);

        let all = store.fetch_candidates(10).await.unwrap();
        let ids: Vec<RecipeId> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.get_recipe(2).await.unwrap().unwrap().title, "Upma");
    }

    #[tokio::test]
    async fn test_fetch_candidates_respects_limit() {
        let store = InMemoryRecipeStore::new();
        store
            .insert_recipes((0..5).map(|i| new_recipe(&format!("Dish {i}"))).collect())
            .await
            .unwrap();

        assert_eq!(store.fetch_candidates(3).await.unwrap().len(), 3);
        assert!(store.fetch_candidates(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rating_requires_existing_recipe() {
        let store = InMemoryRecipeStore::with_recipes(vec![new_recipe("Poha").with_id(4)]);

        let rating = NewRating {
            user_id: 1,
            recipe_id: 4,
            rating: 5,
            comment: Some("lovely".to_string()),
        };
        let stored = store.add_rating(rating.clone()).await.unwrap();
        assert_eq!(stored.id, 1);
        assert_eq!(stored.comment.as_deref(), Some("lovely"));

        let missing = NewRating {
            recipe_id: 99,
            ..rating
        };
        assert!(matches!(
            store.add_rating(missing).await,
            Err(AppError::NotFound(_))
        ));
        assert_eq!(store.ratings().await.len(), 1);
    }
}
