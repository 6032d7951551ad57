use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Stable identifier of a stored recipe
pub type RecipeId = i64;

/// Trims and lowercases free text before any keyword comparison
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Splits a comma-delimited tag string into normalized, non-empty tokens
///
/// Order is preserved so responses list tags the way they were stored.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_text)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// A recipe row as stored by the persistence layer
///
/// `ingredients` and `nutrition` are kept as the raw text the dataset provided
/// (JSON or comma-separated); only [`RecipeDetail`] decodes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub tags: Option<String>,
    pub nutrition: Option<String>,
    pub servings: Option<i32>,
}

impl Recipe {
    /// Normalized tag tokens parsed from the stored tag string
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(parse_tags).unwrap_or_default()
    }
}

/// A recipe that has not been persisted yet
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub tags: Option<String>,
    pub nutrition: Option<String>,
    pub servings: Option<i32>,
}

impl NewRecipe {
    /// Attaches an id, producing the stored representation
    pub fn with_id(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
            prep_time_minutes: self.prep_time_minutes,
            tags: self.tags,
            nutrition: self.nutrition,
            servings: self.servings,
        }
    }
}

/// Full recipe view returned by the detail endpoint
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeDetail {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub tags: Vec<String>,
    pub nutrition: Value,
    pub servings: Option<i32>,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone(),
            ingredients: decode_ingredients(recipe.ingredients.as_deref()),
            instructions: recipe.instructions.clone(),
            prep_time_minutes: recipe.prep_time_minutes,
            tags: recipe
                .tags
                .as_deref()
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            nutrition: decode_nutrition(recipe.nutrition.as_deref()),
            servings: recipe.servings,
        }
    }
}

/// Ingredients are stored either as a JSON array or as comma-separated text
fn decode_ingredients(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    if let Ok(list) = serde_json::from_str::<Vec<String>>(raw) {
        return list;
    }

    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

fn decode_nutrition(raw: Option<&str>) -> Value {
    raw.and_then(|text| serde_json::from_str::<Value>(text).ok())
        .unwrap_or_else(|| json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(tags: Option<&str>) -> Recipe {
        Recipe {
            id: 1,
            title: "Masala Dosa".to_string(),
            ingredients: None,
            instructions: None,
            prep_time_minutes: Some(30),
            tags: tags.map(String::from),
            nutrition: None,
            servings: Some(2),
        }
    }

    #[test]
    fn test_parse_tags_normalizes_and_skips_empty() {
        assert_eq!(
            parse_tags(" South , Breakfast,, VEGETARIAN ,"),
            vec!["south", "breakfast", "vegetarian"]
        );
    }

    #[test]
    fn test_tag_list_without_tags_is_empty() {
        assert!(recipe(None).tag_list().is_empty());
        assert!(recipe(Some("  ")).tag_list().is_empty());
    }

    #[test]
    fn test_detail_decodes_json_ingredients() {
        let mut r = recipe(Some("South,Breakfast"));
        r.ingredients = Some(r#"["rice", "urad dal"]"#.to_string());
        r.nutrition = Some(r#"{"calories": 320}"#.to_string());

        let detail = RecipeDetail::from(&r);
        assert_eq!(detail.ingredients, vec!["rice", "urad dal"]);
        assert_eq!(detail.nutrition["calories"], 320);
        assert_eq!(detail.tags, vec!["South", "Breakfast"]);
    }

    #[test]
    fn test_detail_falls_back_to_comma_separated_ingredients() {
        let mut r = recipe(None);
        r.ingredients = Some("rice, urad dal ,salt".to_string());
        r.nutrition = Some("not json".to_string());

        let detail = RecipeDetail::from(&r);
        assert_eq!(detail.ingredients, vec!["rice", "urad dal", "salt"]);
        assert_eq!(detail.nutrition, json!({}));
        assert!(detail.tags.is_empty());
    }

    #[test]
    fn test_new_recipe_with_id() {
        let stored = NewRecipe {
            title: "Rasam".to_string(),
            tags: Some("south,soup".to_string()),
            ..Default::default()
        }
        .with_id(7);

        assert_eq!(stored.id, 7);
        assert_eq!(stored.title, "Rasam");
        assert_eq!(stored.tag_list(), vec!["south", "soup"]);
    }
}
