use std::collections::HashSet;

use crate::models::{Category, Recipe, RecipeId, RecommendationItem};

use super::category::CategoryClassifier;
use super::scoring::{Jitter, ScoringEngine};
use super::tables::ByCategory;
use super::text::RecipeText;

/// A candidate after scoring and classification
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'r> {
    pub score: f64,
    pub recipe: &'r Recipe,
    pub text: RecipeText,
    pub category: Category,
}

/// How a category quota is being filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillPass {
    /// Only candidates whose detected category is the quota's category
    DetectedCategory,
    /// Any candidate mentioning one of the category's keywords
    KeywordMatch,
}

const FILL_PASSES: [FillPass; 2] = [FillPass::DetectedCategory, FillPass::KeywordMatch];

/// Picks accumulated across every pass of one request
#[derive(Debug, Default)]
struct Selection {
    /// Index into the ranked list and the category the pick is reported under
    picks: Vec<(usize, Category)>,
    chosen: HashSet<RecipeId>,
}

impl Selection {
    fn contains(&self, id: RecipeId) -> bool {
        self.chosen.contains(&id)
    }

    fn push(&mut self, index: usize, id: RecipeId, category: Category) {
        if self.chosen.insert(id) {
            self.picks.push((index, category));
        }
    }

    fn len(&self) -> usize {
        self.picks.len()
    }
}

/// Builds a deduplicated, category-balanced, size-bounded recommendation list
///
/// Quotas are filled in [`Category::ALL`] order, each best-score-first, first
/// by detected category and then by keyword mention. Whatever room is left
/// under `top_k` is backfilled from the best remaining candidates regardless
/// of category.
pub struct BalancedSelector<'a> {
    classifier: CategoryClassifier<'a>,
    scoring: ScoringEngine<'a>,
    target_counts: &'a ByCategory<usize>,
}

impl<'a> BalancedSelector<'a> {
    pub fn new(
        classifier: CategoryClassifier<'a>,
        scoring: ScoringEngine<'a>,
        target_counts: &'a ByCategory<usize>,
    ) -> Self {
        Self {
            classifier,
            scoring,
            target_counts,
        }
    }

    /// Scores and classifies every candidate, best first
    ///
    /// Candidates that fail to score are dropped; the rest of the pool is kept.
    pub fn rank<'r>(
        &self,
        candidates: &'r [Recipe],
        jitter: &mut dyn Jitter,
    ) -> Vec<ScoredCandidate<'r>> {
        let mut ranked = Vec::with_capacity(candidates.len());
        let mut dropped = 0usize;

        for recipe in candidates {
            let text = RecipeText::new(recipe);
            match self.scoring.score(&text, jitter) {
                Ok(score) => {
                    let category = self.classifier.classify(&text);
                    ranked.push(ScoredCandidate {
                        score,
                        recipe,
                        text,
                        category,
                    });
                }
                Err(e) => {
                    tracing::debug!(recipe_id = recipe.id, error = %e, "Dropping candidate");
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            tracing::warn!(
                dropped,
                kept = ranked.len(),
                "Some candidates could not be scored"
            );
        }

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    pub fn select(
        &self,
        candidates: &[Recipe],
        top_k: usize,
        jitter: &mut dyn Jitter,
    ) -> Vec<RecommendationItem> {
        let ranked = self.rank(candidates, jitter);
        let mut selection = Selection::default();

        for (category, &target) in self.target_counts.iter() {
            let picked = self.fill_category(&ranked, category, target, &mut selection);
            if picked < target {
                tracing::debug!(
                    category = %category,
                    target,
                    picked,
                    "Category quota under-filled"
                );
            }
        }

        backfill(&ranked, top_k, &mut selection);

        selection
            .picks
            .into_iter()
            .take(top_k)
            .map(|(index, category)| to_item(&ranked[index], category))
            .collect()
    }

    fn fill_category(
        &self,
        ranked: &[ScoredCandidate<'_>],
        category: Category,
        target: usize,
        selection: &mut Selection,
    ) -> usize {
        let mut picked = 0;

        for pass in FILL_PASSES {
            if picked >= target {
                break;
            }

            for (index, candidate) in ranked.iter().enumerate() {
                if picked >= target {
                    break;
                }
                if selection.contains(candidate.recipe.id) {
                    continue;
                }

                let eligible = match pass {
                    FillPass::DetectedCategory => candidate.category == category,
                    FillPass::KeywordMatch => {
                        self.classifier.mentions_category(&candidate.text, category)
                    }
                };

                if eligible {
                    selection.push(index, candidate.recipe.id, category);
                    picked += 1;
                }
            }
        }

        picked
    }
}

/// Tops the selection up to `top_k` from the best unselected candidates
fn backfill(ranked: &[ScoredCandidate<'_>], top_k: usize, selection: &mut Selection) {
    for (index, candidate) in ranked.iter().enumerate() {
        if selection.len() >= top_k {
            break;
        }
        if selection.contains(candidate.recipe.id) {
            continue;
        }
        selection.push(index, candidate.recipe.id, candidate.category);
    }
}

fn to_item(candidate: &ScoredCandidate<'_>, category: Category) -> RecommendationItem {
    RecommendationItem {
        id: candidate.recipe.id,
        title: candidate.recipe.title.clone(),
        prep_time_minutes: candidate.recipe.prep_time_minutes,
        category,
        tags: candidate.text.tags.clone(),
        score: (candidate.score * 100.0).round() / 100.0,
    }
}
