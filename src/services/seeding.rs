//! Conversion of raw dataset rows into recipes ready for insertion.
//!
//! The dataset carries cuisine and course columns rather than engine tags, so
//! seeding derives a region token and a weather-suitability token from them
//! and appends the lowercased course and diet.

use serde::Deserialize;

use crate::models::NewRecipe;

const WEST_CUISINES: [&str; 4] = ["gujarat", "rajasth", "maharashtra", "punjab"];
const EAST_CUISINES: [&str; 3] = ["bengal", "assam", "oriya"];
const HOT_WEATHER_DISHES: [&str; 4] = ["ice cream", "kulfi", "falooda", "sharbat"];
const COLD_WEATHER_DISHES: [&str; 3] = ["halwa", "gajar", "paratha"];

/// Token for recipes with no particular region or weather affinity
const ANY: &str = "all";

/// One row of the recipe dataset CSV
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DatasetRow {
    #[serde(rename = "TranslatedRecipeName")]
    pub name: String,
    #[serde(rename = "TranslatedIngredients", default)]
    pub ingredients: Option<String>,
    #[serde(rename = "TranslatedInstructions", default)]
    pub instructions: Option<String>,
    #[serde(
        rename = "PrepTimeInMins",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub prep_time_minutes: Option<i32>,
    #[serde(rename = "Servings", default, deserialize_with = "csv::invalid_option")]
    pub servings: Option<i32>,
    #[serde(rename = "Cuisine", default)]
    pub cuisine: Option<String>,
    #[serde(rename = "Course", default)]
    pub course: Option<String>,
    #[serde(rename = "Diet", default)]
    pub diet: Option<String>,
}

fn region_token(cuisine: Option<&str>) -> &'static str {
    let cuisine = cuisine.unwrap_or_default().to_lowercase();

    if cuisine.contains("north") {
        "north"
    } else if cuisine.contains("south") {
        "south"
    } else if WEST_CUISINES.iter().any(|c| cuisine.contains(c)) {
        "west"
    } else if EAST_CUISINES.iter().any(|c| cuisine.contains(c)) {
        "east"
    } else {
        ANY
    }
}

fn weather_token(course: Option<&str>, name: &str) -> &'static str {
    let course = course.unwrap_or_default().to_lowercase();
    let name = name.to_lowercase();

    if course.contains("soup") {
        "rainy"
    } else if HOT_WEATHER_DISHES.iter().any(|d| name.contains(d)) {
        "hot"
    } else if COLD_WEATHER_DISHES.iter().any(|d| name.contains(d)) {
        "cold"
    } else {
        ANY
    }
}

/// Comma-joined seed tags: region, weather suitability, course, diet
pub fn derive_tags(row: &DatasetRow) -> String {
    let course = row.course.as_deref().unwrap_or_default().trim().to_lowercase();
    let diet = row.diet.as_deref().unwrap_or_default().trim().to_lowercase();

    [
        region_token(row.cuisine.as_deref()).to_string(),
        weather_token(row.course.as_deref(), &row.name).to_string(),
        course,
        diet,
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(",")
}

impl From<DatasetRow> for NewRecipe {
    fn from(row: DatasetRow) -> Self {
        let tags = derive_tags(&row);

        NewRecipe {
            title: row.name.trim().to_string(),
            ingredients: row.ingredients,
            instructions: row.instructions,
            prep_time_minutes: row.prep_time_minutes,
            tags: Some(tags),
            nutrition: None,
            servings: row.servings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, cuisine: &str, course: &str, diet: &str) -> DatasetRow {
        DatasetRow {
            name: name.to_string(),
            cuisine: Some(cuisine.to_string()),
            course: Some(course.to_string()),
            diet: Some(diet.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_derive_tags_region_from_cuisine() {
        let cases = [
            ("North Indian Recipes", "north"),
            ("South Indian Recipes", "south"),
            ("Gujarati Recipes", "west"),
            ("Rajasthani", "west"),
            ("Bengali Recipes", "east"),
            ("Oriya Recipes", "east"),
            ("Continental", "all"),
        ];

        for (cuisine, expected) in cases {
            let tags = derive_tags(&row("Dal", cuisine, "", ""));
            assert!(
                tags.starts_with(expected),
                "{cuisine} should map to {expected}, got {tags}"
            );
        }
    }

    #[test]
    fn test_derive_tags_weather_from_course_and_name() {
        assert_eq!(
            derive_tags(&row("Tomato Shorba", "North Indian Recipes", "Soup", "Vegetarian")),
            "north,rainy,soup,vegetarian"
        );
        assert_eq!(
            derive_tags(&row("Kesar Pista Kulfi", "Indian", "Dessert", "Vegetarian")),
            "all,hot,dessert,vegetarian"
        );
        assert_eq!(
            derive_tags(&row("Gajar Ka Halwa", "Punjabi", "Dessert", "Vegetarian")),
            "west,cold,dessert,vegetarian"
        );
    }

    #[test]
    fn test_derive_tags_skips_empty_parts() {
        let tags = derive_tags(&DatasetRow {
            name: "Plain Rice".to_string(),
            ..Default::default()
        });
        assert_eq!(tags, "all,all");
    }

    #[test]
    fn test_dataset_csv_row_to_new_recipe() {
        let data = "\
TranslatedRecipeName,TranslatedIngredients,TranslatedInstructions,PrepTimeInMins,Servings,Cuisine,Course,Diet
Masala Karela Recipe,\"karela, salt, onion\",Slice and fry.,15,6,Indian,Side Dish,Diabetic Friendly
Sweet Lassi,\"curd, sugar\",Blend.,n/a,,Punjabi,Beverage,Vegetarian
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<DatasetRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);

        let karela = NewRecipe::from(rows[0].clone());
        assert_eq!(karela.title, "Masala Karela Recipe");
        assert_eq!(karela.ingredients.as_deref(), Some("karela, salt, onion"));
        assert_eq!(karela.prep_time_minutes, Some(15));
        assert_eq!(karela.servings, Some(6));
        assert_eq!(
            karela.tags.as_deref(),
            Some("all,all,side dish,diabetic friendly")
        );

        let lassi = NewRecipe::from(rows[1].clone());
        assert_eq!(lassi.prep_time_minutes, None);
        assert_eq!(lassi.servings, None);
        assert_eq!(lassi.tags.as_deref(), Some("west,all,beverage,vegetarian"));
    }
}
