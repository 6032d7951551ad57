use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use thali_api::{
    config::Config,
    db::{self, PgRecipeStore, RecipeStore},
    models::NewRecipe,
    services::seeding::DatasetRow,
    telemetry,
};

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Loads the recipe dataset CSV into the database")]
struct Args {
    /// Path to the recipe dataset CSV
    #[arg(short, long, default_value = "indianFoodDatasetCSV.csv")]
    dataset: PathBuf,

    /// Recipes inserted per transaction
    #[arg(short, long, default_value_t = 500)]
    batch_size: usize,

    /// Parse the dataset and report counts without touching the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();
    let args = Args::parse();

    let mut reader = csv::Reader::from_path(&args.dataset)
        .with_context(|| format!("Failed to open dataset {}", args.dataset.display()))?;

    let mut recipes = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in reader.deserialize::<DatasetRow>().enumerate() {
        match row {
            Ok(row) if !row.name.trim().is_empty() => recipes.push(NewRecipe::from(row)),
            Ok(_) => skipped += 1,
            Err(e) => {
                skipped += 1;
                tracing::warn!(record = line + 1, error = %e, "Skipping malformed dataset row");
            }
        }
    }

    tracing::info!(parsed = recipes.len(), skipped, "Dataset parsed");

    if args.dry_run {
        return Ok(());
    }

    let config = Config::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;
    let store = PgRecipeStore::new(pool);

    let mut inserted = 0u64;
    for batch in recipes.chunks(args.batch_size.max(1)) {
        inserted += store.insert_recipes(batch.to_vec()).await?;
        tracing::info!(inserted, total = recipes.len(), "Inserted batch");
    }

    tracing::info!(inserted, store = store.name(), "Database seeded");

    Ok(())
}
