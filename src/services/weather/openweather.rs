/// OpenWeatherMap current-weather provider
///
/// Calls `/data/2.5/weather?q={location}&units=metric` and reduces the payload
/// to a [`WeatherSnapshot`]. Snapshots are cached per lowercase location when a
/// Redis cache is available.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{OwmCurrentWeather, WeatherSnapshot},
    services::weather::WeatherProvider,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct OpenWeatherProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    cache: Option<Cache>,
    cache_ttl: u64,
}

impl OpenWeatherProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        cache: Option<Cache>,
        cache_ttl: u64,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl,
        })
    }

    async fn fetch_live(&self, location: &str) -> AppResult<WeatherSnapshot> {
        let url = format!("{}/data/2.5/weather", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OpenWeatherMap returned status {}: {}",
                status, body
            )));
        }

        let payload: OwmCurrentWeather = response.json().await?;
        let snapshot = payload.into_snapshot(location);

        tracing::info!(
            location = %snapshot.location,
            condition = ?snapshot.condition,
            temp = ?snapshot.temp,
            "Fetched current weather"
        );

        Ok(snapshot)
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, location: &str) -> AppResult<WeatherSnapshot> {
        let location = location.trim();
        if location.is_empty() {
            return Err(AppError::InvalidInput(
                "Location cannot be empty".to_string(),
            ));
        }

        match &self.cache {
            Some(cache) => cached!(
                cache,
                CacheKey::Weather(location.to_string()),
                self.cache_ttl,
                self.fetch_live(location)
            ),
            None => self.fetch_live(location).await,
        }
    }

    fn name(&self) -> &'static str {
        "openweathermap"
    }
}
