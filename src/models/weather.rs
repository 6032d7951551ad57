use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Current weather at a location, as reported by the weather collaborator
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Location name, possibly empty when the provider did not resolve one
    #[serde(default)]
    pub location: String,
    /// Coarse condition text such as "Rain" or "Clear"
    #[serde(default)]
    pub condition: Option<String>,
    /// Temperature in degrees Celsius
    #[serde(default, deserialize_with = "lenient_temperature")]
    pub temp: Option<f64>,
}

impl WeatherSnapshot {
    pub fn new(location: impl Into<String>, condition: Option<&str>, temp: Option<f64>) -> Self {
        Self {
            location: location.into(),
            condition: condition.map(String::from),
            temp,
        }
    }
}

/// Accepts numbers and numeric strings; anything else carries no temperature signal
pub(crate) fn lenient_temperature<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|t| t.is_finite()))
}

/// Coarse geography bucket inferred from a location string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// Order in which region keyword lists are scanned
    pub const SCAN_ORDER: [Region; 4] = [Region::South, Region::North, Region::West, Region::East];

    /// Token that recipes carry in their tags or title
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "north",
            Region::South => "south",
            Region::East => "east",
            Region::West => "west",
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse weather bucket; `All` means no strong seasonal signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherTag {
    Rainy,
    Hot,
    Cold,
    All,
}

impl WeatherTag {
    /// Token that recipes carry in their tags or title
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherTag::Rainy => "rainy",
            WeatherTag::Hot => "hot",
            WeatherTag::Cold => "cold",
            WeatherTag::All => "all",
        }
    }
}

impl Display for WeatherTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
