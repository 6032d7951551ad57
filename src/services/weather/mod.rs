use crate::{
    error::{AppError, AppResult},
    models::WeatherSnapshot,
};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current weather for a location
///
/// Implementations may fail for any reason; callers that feed the recommender
/// go through [`current_weather`], which turns every failure into "no weather".
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch_current(&self, location: &str) -> AppResult<WeatherSnapshot>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Provider used when no API key is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledWeatherProvider;

#[async_trait::async_trait]
impl WeatherProvider for DisabledWeatherProvider {
    async fn fetch_current(&self, _location: &str) -> AppResult<WeatherSnapshot> {
        Err(AppError::Config(
            "Weather lookups are disabled: OPENWEATHER_API_KEY is not set".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Current weather for `location`, or `None` when the provider fails
pub async fn current_weather(
    provider: &dyn WeatherProvider,
    location: &str,
) -> Option<WeatherSnapshot> {
    match provider.fetch_current(location).await {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                location = %location,
                error = %e,
                "Weather lookup failed, continuing without weather"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_current_weather_passes_snapshot_through() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .withf(|location| location == "Kochi")
            .times(1)
            .returning(|_| Ok(WeatherSnapshot::new("Kochi", Some("Rain"), Some(24.0))));

        let snapshot = current_weather(&provider, "Kochi").await;
        assert_eq!(
            snapshot,
            Some(WeatherSnapshot::new("Kochi", Some("Rain"), Some(24.0)))
        );
    }

    #[tokio::test]
    async fn test_current_weather_swallows_errors() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .returning(|_| Err(AppError::ExternalApi("timeout".to_string())));
        provider.expect_name().return_const("mock");

        assert_eq!(current_weather(&provider, "Kochi").await, None);
    }

    #[tokio::test]
    async fn test_disabled_provider_yields_no_weather() {
        assert_eq!(current_weather(&DisabledWeatherProvider, "Delhi").await, None);
    }
}
