use crate::models::Category;

use super::tables::{ByCategory, KeywordList, TitleFallback};
use super::text::RecipeText;

/// Assigns exactly one category to every recipe
pub struct CategoryClassifier<'a> {
    keywords: &'a ByCategory<KeywordList>,
    title_fallbacks: &'a [TitleFallback],
}

impl<'a> CategoryClassifier<'a> {
    pub fn new(keywords: &'a ByCategory<KeywordList>, title_fallbacks: &'a [TitleFallback]) -> Self {
        Self {
            keywords,
            title_fallbacks,
        }
    }

    /// First category whose keywords appear in the tags or title wins; then the
    /// title-only cues; otherwise `Food`
    pub fn classify(&self, text: &RecipeText) -> Category {
        self.keywords
            .iter()
            .find(|(_, keywords)| text.mentions_any(keywords))
            .map(|(category, _)| category)
            .or_else(|| {
                self.title_fallbacks
                    .iter()
                    .find(|f| f.keywords.iter().any(|k| text.title.contains(k.as_str())))
                    .map(|f| f.category)
            })
            .unwrap_or(Category::Food)
    }

    /// Looser test used when a category quota cannot be met by detected category
    pub fn mentions_category(&self, text: &RecipeText, category: Category) -> bool {
        text.mentions_any(self.keywords.get(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{normalize_text, parse_tags};
    use crate::services::recommender::RecommenderTables;

    fn classify(tags: &str, title: &str) -> Category {
        let tables = RecommenderTables::default();
        let classifier = CategoryClassifier::new(&tables.categories, &tables.title_fallbacks);
        classifier.classify(&RecipeText {
            tags: parse_tags(tags),
            title: normalize_text(title),
        })
    }

    #[test]
    fn test_keyword_in_tags_or_title() {
        assert_eq!(classify("south,curry", "Kerala Fish Curry"), Category::Food);
        assert_eq!(classify("drink", "Something Pink"), Category::Drinks);
        assert_eq!(classify("", "Tomato Rasam"), Category::Soups);
        assert_eq!(classify("north,sweet", "Gajar Ka Halwa"), Category::Desserts);
        assert_eq!(classify("", "Onion Pakora"), Category::Snacks);
    }

    #[test]
    fn test_first_category_in_order_wins() {
        // "rice" is a food keyword and "kheer" a dessert keyword; food is scanned first
        assert_eq!(classify("", "Rice Kheer"), Category::Food);
    }

    #[test]
    fn test_title_fallbacks() {
        assert_eq!(classify("", "Masala Tea"), Category::Drinks);
        assert_eq!(classify("", "Ice Gola"), Category::Desserts);
    }

    #[test]
    fn test_fallback_cues_ignore_tags() {
        assert_eq!(classify("tea", "Morning Special"), Category::Food);
    }

    #[test]
    fn test_empty_recipe_defaults_to_food() {
        assert_eq!(classify("", ""), Category::Food);
        assert_eq!(classify(" , ,", "   "), Category::Food);
    }

    #[test]
    fn test_mentions_category() {
        let tables = RecommenderTables::default();
        let classifier = CategoryClassifier::new(&tables.categories, &tables.title_fallbacks);
        let text = RecipeText {
            tags: parse_tags("street food,chaat"),
            title: normalize_text("Aloo Tikki"),
        };
        assert!(classifier.mentions_category(&text, Category::Snacks));
        assert!(!classifier.mentions_category(&text, Category::Soups));
    }
}
