use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecipeId;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// A user's rating of a recipe
///
/// Ratings are persisted for later analysis; the recommender does not read them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Rating {
    pub id: i64,
    pub user_id: i64,
    pub recipe_id: RecipeId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Rating submitted through the feedback endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRating {
    pub user_id: i64,
    pub recipe_id: RecipeId,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl NewRating {
    pub fn is_in_range(&self) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: i32) -> NewRating {
        NewRating {
            user_id: 1,
            recipe_id: 2,
            rating: value,
            comment: None,
        }
    }

    #[test]
    fn test_rating_range() {
        assert!(rating(1).is_in_range());
        assert!(rating(5).is_in_range());
        assert!(!rating(0).is_in_range());
        assert!(!rating(6).is_in_range());
    }

    #[test]
    fn test_new_rating_comment_is_optional() {
        let parsed: NewRating =
            serde_json::from_str(r#"{"user_id":3,"recipe_id":9,"rating":4}"#).unwrap();
        assert_eq!(parsed.comment, None);
        assert_eq!(parsed.rating, 4);
    }
}
