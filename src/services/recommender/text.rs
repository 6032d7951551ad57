use crate::models::{normalize_text, Recipe};

/// Normalized searchable text of a recipe, built once per request
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeText {
    pub tags: Vec<String>,
    pub title: String,
}

impl RecipeText {
    pub fn new(recipe: &Recipe) -> Self {
        Self {
            tags: recipe.tag_list(),
            title: normalize_text(&recipe.title),
        }
    }

    /// True when `keyword` occurs inside any tag or inside the title
    pub fn mentions(&self, keyword: &str) -> bool {
        self.tags.iter().any(|tag| tag.contains(keyword)) || self.title.contains(keyword)
    }

    /// True when any of `keywords` is mentioned
    pub fn mentions_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.mentions(k.as_ref()))
    }

    /// True when `token` is one of the tags exactly, or occurs inside the title
    pub fn carries_token(&self, token: &str) -> bool {
        self.tags.iter().any(|tag| tag == token) || self.title.contains(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(tags: &str, title: &str) -> RecipeText {
        RecipeText {
            tags: crate::models::parse_tags(tags),
            title: normalize_text(title),
        }
    }

    #[test]
    fn test_mentions_matches_substrings_of_tags_and_title() {
        let t = text("south,main course", "Kerala Fish Curry");
        assert!(t.mentions("curry"));
        assert!(t.mentions("course"));
        assert!(!t.mentions("lassi"));
    }

    #[test]
    fn test_carries_token_requires_whole_tag() {
        let t = text("southern", "Appam");
        assert!(!t.carries_token("south"));

        let t = text("south", "Appam");
        assert!(t.carries_token("south"));

        let t = text("", "South Indian Thali");
        assert!(t.carries_token("south"));
    }
}
