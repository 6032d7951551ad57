use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::RecipeStore,
    error::AppResult,
    models::{NewRating, NewRecipe, Rating, Recipe, RecipeId},
};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Applies the embedded schema migrations
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Postgres-backed recipe store
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: PgPool,
}

impl PgRecipeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RecipeStore for PgRecipeStore {
    async fn fetch_candidates(&self, limit: usize) -> AppResult<Vec<Recipe>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let recipes = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, ingredients, instructions, prep_time_minutes, tags, nutrition, servings
            FROM recipes
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(count = recipes.len(), "Loaded candidate recipes");

        Ok(recipes)
    }

    async fn get_recipe(&self, id: RecipeId) -> AppResult<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, ingredients, instructions, prep_time_minutes, tags, nutrition, servings
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(recipe)
    }

    async fn insert_recipes(&self, recipes: Vec<NewRecipe>) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for recipe in recipes {
            let result = sqlx::query(
                r#"
                INSERT INTO recipes
                    (title, ingredients, instructions, prep_time_minutes, tags, nutrition, servings)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(recipe.title)
            .bind(recipe.ingredients)
            .bind(recipe.instructions)
            .bind(recipe.prep_time_minutes)
            .bind(recipe.tags)
            .bind(recipe.nutrition)
            .bind(recipe.servings)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;

        Ok(inserted)
    }

    async fn add_rating(&self, rating: NewRating) -> AppResult<Rating> {
        let stored = sqlx::query_as::<_, Rating>(
            r#"
            INSERT INTO ratings (user_id, recipe_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, recipe_id, rating, comment, created_at
            "#,
        )
        .bind(rating.user_id)
        .bind(rating.recipe_id)
        .bind(rating.rating)
        .bind(rating.comment)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}
