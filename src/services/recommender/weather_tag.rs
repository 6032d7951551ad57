use crate::models::{normalize_text, WeatherSnapshot, WeatherTag};

/// Condition substrings that mean precipitation
pub const PRECIPITATION_MARKERS: [&str; 3] = ["rain", "drizzle", "shower"];

/// Temperatures strictly above this are hot
pub const HOT_ABOVE_CELSIUS: f64 = 30.0;

/// Temperatures strictly below this are cold
pub const COLD_BELOW_CELSIUS: f64 = 15.0;

/// Reduces a weather snapshot to a coarse tag
///
/// Precipitation outranks temperature. Readings from 15 to 30 degrees
/// inclusive, missing snapshots and missing temperatures all map to `All`.
pub fn classify(snapshot: Option<&WeatherSnapshot>) -> WeatherTag {
    let Some(snapshot) = snapshot else {
        return WeatherTag::All;
    };

    let condition = snapshot
        .condition
        .as_deref()
        .map(normalize_text)
        .unwrap_or_default();

    if PRECIPITATION_MARKERS.iter().any(|m| condition.contains(m)) {
        return WeatherTag::Rainy;
    }

    match snapshot.temp.filter(|t| t.is_finite()) {
        Some(t) if t > HOT_ABOVE_CELSIUS => WeatherTag::Hot,
        Some(t) if t < COLD_BELOW_CELSIUS => WeatherTag::Cold,
        _ => WeatherTag::All,
    }
}
