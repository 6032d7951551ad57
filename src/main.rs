use std::sync::Arc;

use thali_api::{
    api::{create_router, AppState},
    config::Config,
    db::{self, Cache, PgRecipeStore},
    services::{
        recommender::{Recommender, RecommenderTables},
        weather::{DisabledWeatherProvider, OpenWeatherProvider, WeatherProvider},
    },
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    let config = Config::from_env()?;

    let pool = db::create_pool(&config.database_url).await?;
    db::run_migrations(&pool).await?;

    let redis_client = db::create_redis_client(&config.redis_url)?;
    let (cache, cache_handle) = Cache::new(redis_client).await;

    let weather: Arc<dyn WeatherProvider> = match config.openweather_api_key.clone() {
        Some(api_key) if !api_key.trim().is_empty() => Arc::new(OpenWeatherProvider::new(
            api_key,
            config.openweather_api_url.clone(),
            Some(cache),
            config.weather_cache_ttl_secs,
        )?),
        _ => {
            tracing::warn!("OPENWEATHER_API_KEY not set, recommendations will ignore weather");
            Arc::new(DisabledWeatherProvider)
        }
    };

    let tables = match &config.recommender_tables_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading recommender tables");
            RecommenderTables::load(path)?
        }
        None => RecommenderTables::default(),
    };

    let state = AppState::new(
        Arc::new(PgRecipeStore::new(pool)),
        weather,
        Recommender::new(tables),
        config.recommend_settings(),
    );

    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cache_handle.shutdown().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install TERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
