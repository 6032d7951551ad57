use rand::{rngs::StdRng, Rng, SeedableRng};
use thiserror::Error;

use crate::models::{Region, WeatherTag};

use super::tables::{ByCategory, KeywordList};
use super::text::RecipeText;

pub const REGION_MATCH_POINTS: f64 = 40.0;
pub const WEATHER_MATCH_POINTS: f64 = 30.0;
pub const BOOST_KEYWORD_POINTS: f64 = 6.0;
pub const MAX_TAG_RICHNESS: usize = 5;
/// Exclusive upper bound of the tie-break jitter
pub const MAX_JITTER: f64 = 2.0;

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("Jitter {0} is outside [0, 2)")]
    JitterOutOfRange(f64),
}

/// Source of the random tie-breaker added to every score
pub trait Jitter {
    /// Draws a fresh value in `[0, MAX_JITTER)`
    fn next_jitter(&mut self) -> f64;
}

/// Uniform jitter backed by a seedable RNG
pub struct RandomJitter<R = StdRng> {
    rng: R,
}

impl RandomJitter<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn next_jitter(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_JITTER)
    }
}

/// Constant jitter for reproducible scores
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl Jitter for FixedJitter {
    fn next_jitter(&mut self) -> f64 {
        self.0
    }
}

/// Additive relevance score for one request's signals
///
/// Boost keywords are counted across every category's list, not only the
/// recipe's own category, so a recipe can collect points from several lists.
pub struct ScoringEngine<'a> {
    region: Option<Region>,
    weather_tag: WeatherTag,
    boosts: &'a ByCategory<KeywordList>,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(
        region: Option<Region>,
        weather_tag: WeatherTag,
        boosts: &'a ByCategory<KeywordList>,
    ) -> Self {
        Self {
            region,
            weather_tag,
            boosts,
        }
    }

    /// Score without the random tie-breaker
    pub fn structural_score(&self, text: &RecipeText) -> f64 {
        let mut score = 0.0;

        if let Some(region) = self.region {
            if text.carries_token(region.as_str()) {
                score += REGION_MATCH_POINTS;
            }
        }

        if self.weather_tag != WeatherTag::All && text.carries_token(self.weather_tag.as_str()) {
            score += WEATHER_MATCH_POINTS;
        }

        let boost_hits = self
            .boosts
            .iter()
            .flat_map(|(_, keywords)| keywords.iter())
            .filter(|keyword| text.mentions(keyword))
            .count();
        score += BOOST_KEYWORD_POINTS * boost_hits as f64;

        score += text.tags.len().min(MAX_TAG_RICHNESS) as f64;

        score
    }

    /// Full score including one fresh jitter draw
    pub fn score(&self, text: &RecipeText, jitter: &mut dyn Jitter) -> Result<f64, ScoreError> {
        let noise = jitter.next_jitter();
        if !(0.0..MAX_JITTER).contains(&noise) {
            return Err(ScoreError::JitterOutOfRange(noise));
        }

        Ok(self.structural_score(text) + noise)
    }
}
