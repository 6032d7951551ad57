//! Keyword tables that drive classification, boosting and category quotas.
//!
//! The built-in tables are the defaults; a TOML file can replace any top-level
//! table without touching the algorithm. Region and category tables are always
//! scanned in [`Region`] and [`Category`] enum order; region aliases and title
//! fallbacks are scanned in the order they are listed.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{normalize_text, Category, Region, WeatherTag};

pub type KeywordList = Vec<String>;

#[derive(Debug, Error)]
pub enum TablesError {
    #[error("Failed to read recommender tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid recommender tables: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One value per food category
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ByCategory<T> {
    pub food: T,
    pub drinks: T,
    pub soups: T,
    pub desserts: T,
    pub snacks: T,
}

impl<T> ByCategory<T> {
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Food => &self.food,
            Category::Drinks => &self.drinks,
            Category::Soups => &self.soups,
            Category::Desserts => &self.desserts,
            Category::Snacks => &self.snacks,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Food => &mut self.food,
            Category::Drinks => &mut self.drinks,
            Category::Soups => &mut self.soups,
            Category::Desserts => &mut self.desserts,
            Category::Snacks => &mut self.snacks,
        }
    }

    /// Entries in [`Category::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// One value per region
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ByRegion<T> {
    pub north: T,
    pub south: T,
    pub east: T,
    pub west: T,
}

impl<T> ByRegion<T> {
    pub fn get(&self, region: Region) -> &T {
        match region {
            Region::North => &self.north,
            Region::South => &self.south,
            Region::East => &self.east,
            Region::West => &self.west,
        }
    }

    fn get_mut(&mut self, region: Region) -> &mut T {
        match region {
            Region::North => &mut self.north,
            Region::South => &mut self.south,
            Region::East => &mut self.east,
            Region::West => &mut self.west,
        }
    }

    /// Entries in [`Region::SCAN_ORDER`]
    pub fn iter(&self) -> impl Iterator<Item = (Region, &T)> + '_ {
        Region::SCAN_ORDER.into_iter().map(move |r| (r, self.get(r)))
    }
}

/// Literal mention that maps straight to a region when no place name matched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionAlias {
    pub alias: String,
    pub region: Region,
}

/// Title-only cues checked after the main category scan comes up empty
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleFallback {
    pub category: Category,
    pub keywords: KeywordList,
}

/// Per-weather boost keyword tables
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoostTables {
    pub rainy: ByCategory<KeywordList>,
    pub hot: ByCategory<KeywordList>,
    pub cold: ByCategory<KeywordList>,
    /// Used when the weather carries no strong signal
    pub default: ByCategory<KeywordList>,
}

impl BoostTables {
    pub fn for_weather(&self, tag: WeatherTag) -> &ByCategory<KeywordList> {
        match tag {
            WeatherTag::Rainy => &self.rainy,
            WeatherTag::Hot => &self.hot,
            WeatherTag::Cold => &self.cold,
            WeatherTag::All => &self.default,
        }
    }

    fn tables_mut(&mut self) -> [&mut ByCategory<KeywordList>; 4] {
        [
            &mut self.rainy,
            &mut self.hot,
            &mut self.cold,
            &mut self.default,
        ]
    }
}

/// Complete configuration surface of the recommender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecommenderTables {
    pub regions: ByRegion<KeywordList>,
    pub region_aliases: Vec<RegionAlias>,
    pub categories: ByCategory<KeywordList>,
    pub title_fallbacks: Vec<TitleFallback>,
    pub boosts: BoostTables,
    pub target_counts: ByCategory<usize>,
}

impl RecommenderTables {
    /// Parses tables from TOML; omitted top-level tables keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self, TablesError> {
        let tables: Self = toml::from_str(source)?;
        Ok(tables.normalized())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, TablesError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Total number of items the category quotas ask for
    pub fn total_target(&self) -> usize {
        self.target_counts.iter().map(|(_, count)| *count).sum()
    }

    /// Lowercases and trims every keyword, dropping blanks
    fn normalized(mut self) -> Self {
        for region in Region::SCAN_ORDER {
            normalize_list(self.regions.get_mut(region));
        }
        for alias in &mut self.region_aliases {
            alias.alias = normalize_text(&alias.alias);
        }
        self.region_aliases.retain(|a| !a.alias.is_empty());
        for category in Category::ALL {
            normalize_list(self.categories.get_mut(category));
            for table in self.boosts.tables_mut() {
                normalize_list(table.get_mut(category));
            }
        }
        for fallback in &mut self.title_fallbacks {
            normalize_list(&mut fallback.keywords);
        }
        self
    }
}

fn normalize_list(list: &mut KeywordList) {
    for keyword in list.iter_mut() {
        *keyword = normalize_text(keyword);
    }
    list.retain(|k| !k.is_empty());
}

fn words(list: &[&str]) -> KeywordList {
    list.iter().map(|w| w.to_string()).collect()
}

fn per_category(
    food: &[&str],
    drinks: &[&str],
    soups: &[&str],
    desserts: &[&str],
    snacks: &[&str],
) -> ByCategory<KeywordList> {
    ByCategory {
        food: words(food),
        drinks: words(drinks),
        soups: words(soups),
        desserts: words(desserts),
        snacks: words(snacks),
    }
}

impl Default for RecommenderTables {
    fn default() -> Self {
        let regions = ByRegion {
            south: words(&[
                "kerala",
                "kottayam",
                "palakkad",
                "trivandrum",
                "thiruvananthapuram",
                "kochi",
                "tamil",
                "chennai",
                "madurai",
                "karnataka",
                "bangalore",
                "andhra",
                "vizag",
                "telangana",
            ]),
            north: words(&[
                "delhi",
                "punjab",
                "chandigarh",
                "uttar",
                "lucknow",
                "varanasi",
                "shimla",
                "himachal",
            ]),
            west: words(&["mumbai", "maharashtra", "gujarat", "rajasthan", "goa"]),
            east: words(&[
                "kolkata",
                "bengal",
                "west bengal",
                "assam",
                "odisha",
                "manipur",
                "nagaland",
            ]),
        };

        let region_aliases = [
            ("south", Region::South),
            ("sindh", Region::South),
            ("north", Region::North),
            ("west", Region::West),
            ("east", Region::East),
        ]
        .into_iter()
        .map(|(alias, region)| RegionAlias {
            alias: alias.to_string(),
            region,
        })
        .collect();

        let categories = per_category(
            &[
                "main course",
                "curry",
                "rice",
                "biryani",
                "paratha",
                "dosa",
                "idli",
                "pulao",
                "thali",
                "sabzi",
                "dal",
            ],
            &["drink", "juice", "lassi", "chai", "coffee", "buttermilk", "sharbat"],
            &["soup", "rasam", "stew", "broth", "clear soup"],
            &[
                "dessert",
                "sweet",
                "halwa",
                "kheer",
                "kulfi",
                "ice cream",
                "gulab",
                "jalebi",
                "barfi",
            ],
            &[
                "snack",
                "chaat",
                "pakora",
                "samosa",
                "vada",
                "cutlet",
                "pani puri",
                "bhel",
            ],
        );

        let title_fallbacks = vec![
            TitleFallback {
                category: Category::Drinks,
                keywords: words(&["juice", "lassi", "tea", "coffee", "sharbat"]),
            },
            TitleFallback {
                category: Category::Soups,
                keywords: words(&["soup", "rasam", "stew"]),
            },
            TitleFallback {
                category: Category::Desserts,
                keywords: words(&["ice", "kulfi", "halwa", "kheer", "gulab", "jalebi"]),
            },
        ];

        let boosts = BoostTables {
            rainy: per_category(
                &["curry", "biryani", "masala", "dosa", "idli"],
                &["chai", "tea", "coffee"],
                &["soup", "rasam"],
                &["halwa", "kheer", "payasam"],
                &["pakora", "samosa", "vada"],
            ),
            hot: per_category(
                &["salad", "pulao", "rice", "light", "thali"],
                &["lassi", "juice", "sharbat", "buttermilk"],
                &["raita", "cold soup"],
                &["ice cream", "kulfi", "falooda"],
                &["chaat", "fruit"],
            ),
            cold: per_category(
                &["paratha", "curry", "biryani", "masala"],
                &["chai", "coffee", "hot"],
                &["soup", "stew", "rasam"],
                &["halwa", "pudding", "gajar"],
                &["pakora", "samosa"],
            ),
            default: per_category(
                &["indian", "main course", "dal", "sabzi"],
                &["juice", "lassi", "chai"],
                &["soup", "rasam"],
                &["dessert", "sweet"],
                &["snack", "chaat"],
            ),
        };

        let target_counts = ByCategory {
            food: 10,
            drinks: 5,
            soups: 5,
            desserts: 5,
            snacks: 5,
        };

        Self {
            regions,
            region_aliases,
            categories,
            title_fallbacks,
            boosts,
            target_counts,
        }
    }
}
