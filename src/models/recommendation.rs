use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{RecipeId, Region, WeatherTag};

/// Food-type bucket a recipe falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drinks,
    Soups,
    Desserts,
    Snacks,
}

impl Category {
    /// Fixed order used for classification and for filling category quotas
    pub const ALL: [Category; 5] = [
        Category::Food,
        Category::Drinks,
        Category::Soups,
        Category::Desserts,
        Category::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Drinks => "drinks",
            Category::Soups => "soups",
            Category::Desserts => "desserts",
            Category::Snacks => "snacks",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recommended recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationItem {
    pub id: RecipeId,
    pub title: String,
    pub prep_time_minutes: Option<i32>,
    pub category: Category,
    pub tags: Vec<String>,
    /// Relevance score rounded to two decimals, exposed for debugging only
    pub score: f64,
}

/// Result of one recommendation run together with the signals that drove it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub region: Option<Region>,
    pub weather_tag: WeatherTag,
    pub items: Vec<RecommendationItem>,
}

impl Recommendations {
    pub fn empty(region: Option<Region>, weather_tag: WeatherTag) -> Self {
        Self {
            region,
            weather_tag,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_is_fixed() {
        let names: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
        assert_eq!(names, vec!["food", "drinks", "soups", "desserts", "snacks"]);
    }

    #[test]
    fn test_category_serialization() {
        assert_eq!(serde_json::to_string(&Category::Desserts).unwrap(), "\"desserts\"");
        let parsed: Category = serde_json::from_str("\"snacks\"").unwrap();
        assert_eq!(parsed, Category::Snacks);
    }

    #[test]
    fn test_empty_keeps_signals() {
        let empty = Recommendations::empty(Some(Region::South), WeatherTag::Rainy);
        assert_eq!(empty.region, Some(Region::South));
        assert_eq!(empty.weather_tag, WeatherTag::Rainy);
        assert!(empty.items.is_empty());
    }
}
