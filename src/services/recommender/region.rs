use crate::models::{normalize_text, Region};

use super::tables::{ByRegion, KeywordList, RegionAlias};

/// Maps free-text locations to a region by first substring hit
pub struct RegionClassifier<'a> {
    keywords: &'a ByRegion<KeywordList>,
    aliases: &'a [RegionAlias],
}

impl<'a> RegionClassifier<'a> {
    pub fn new(keywords: &'a ByRegion<KeywordList>, aliases: &'a [RegionAlias]) -> Self {
        Self { keywords, aliases }
    }

    /// Place names win over literal direction words; nothing matched means `None`
    pub fn classify(&self, location: &str) -> Option<Region> {
        let location = normalize_text(location);
        if location.is_empty() {
            return None;
        }

        self.keywords
            .iter()
            .find(|(_, places)| places.iter().any(|place| location.contains(place.as_str())))
            .map(|(region, _)| region)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|a| location.contains(a.alias.as_str()))
                    .map(|a| a.region)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::recommender::RecommenderTables;

    fn classify(location: &str) -> Option<Region> {
        let tables = RecommenderTables::default();
        RegionClassifier::new(&tables.regions, &tables.region_aliases).classify(location)
    }

    #[test]
    fn test_city_names() {
        assert_eq!(classify("Kochi"), Some(Region::South));
        assert_eq!(classify("  NEW DELHI "), Some(Region::North));
        assert_eq!(classify("Mumbai"), Some(Region::West));
        assert_eq!(classify("Kolkata"), Some(Region::East));
    }

    #[test]
    fn test_west_bengal_is_east() {
        assert_eq!(classify("Siliguri, West Bengal"), Some(Region::East));
    }

    #[test]
    fn test_direction_word_fallback() {
        assert_eq!(classify("South Africa"), Some(Region::South));
        assert_eq!(classify("Sindh"), Some(Region::South));
        assert_eq!(classify("North Pole"), Some(Region::North));
        assert_eq!(classify("Westminster"), Some(Region::West));
        assert_eq!(classify("Middle East"), Some(Region::East));
    }

    #[test]
    fn test_aliases_are_scanned_in_listed_order() {
        let tables = RecommenderTables::from_toml_str(
            r#"
            [[region_aliases]]
            alias = "east"
            region = "east"

            [[region_aliases]]
            alias = "south"
            region = "south"
            "#,
        )
        .unwrap();
        let classifier = RegionClassifier::new(&tables.regions, &tables.region_aliases);

        assert_eq!(classifier.classify("South East Asia"), Some(Region::East));
        assert_eq!(classify("South East Asia"), Some(Region::South));
    }

    #[test]
    fn test_unknown_or_empty_location() {
        assert_eq!(classify("Paris"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }
}
