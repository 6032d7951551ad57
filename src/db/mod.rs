pub mod memory;
pub mod postgres;
pub mod redis;
pub mod store;

pub use memory::InMemoryRecipeStore;
pub use postgres::{create_pool, run_migrations, PgRecipeStore};
pub use redis::create_redis_client;
pub use redis::Cache;
pub use redis::CacheKey;
pub use redis::CacheWriterHandle;
pub use store::RecipeStore;
