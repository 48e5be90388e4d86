//! Recipe scoring and ranking.
//!
//! Every recipe that survives the filter pipeline gets an additive score:
//!
//! | component          | points                                         |
//! |--------------------|------------------------------------------------|
//! | cuisine affinity   | learned score for the recipe's cuisine         |
//! | tag affinity       | sum of learned scores for the recipe's tags    |
//! | weather match      | 5 if the recipe suits the current weather      |
//! | meal-type match    | 10 if a meal type is chosen and served         |
//! | cuisine match      | 10 if a cuisine is chosen and equal            |
//!
//! Ranking is by total score, highest first, with catalog order breaking
//! ties.

use crate::context::{Candidate, ScoringContext};
use crate::filter_pipeline::FilterPipeline;
use crate::filters::ExclusionFilter;
use crate::suitability::map_suitability;
use data_loader::{Recipe, RecipeCatalog, SuitabilityTag};
use preferences::PreferenceModel;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Points for a recipe that suits the current weather
pub const WEATHER_MATCH_BONUS: u32 = 5;

/// Points for matching the chosen meal type
pub const MEAL_TYPE_MATCH_BONUS: u32 = 10;

/// Points for matching the chosen cuisine
pub const CUISINE_MATCH_BONUS: u32 = 10;

/// Per-component view of a recipe's score.
///
/// Kept so the frontend can explain why a dish was picked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub cuisine_affinity: u32,
    pub tag_affinity: u32,
    pub weather_bonus: u32,
    pub meal_type_bonus: u32,
    pub cuisine_bonus: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        [
            self.cuisine_affinity,
            self.tag_affinity,
            self.weather_bonus,
            self.meal_type_bonus,
            self.cuisine_bonus,
        ]
        .into_iter()
        .fold(0, u32::saturating_add)
    }
}

/// A ranked recipe, borrowed from the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub catalog_index: usize,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Score one recipe under the given context.
///
/// `suitability` is passed in rather than derived so a ranking run maps the
/// weather once.
pub fn score_recipe(
    recipe: &Recipe,
    suitability: SuitabilityTag,
    context: &ScoringContext<'_>,
) -> ScoreBreakdown {
    let preferences: &PreferenceModel = context.preferences;

    let weather_bonus = if recipe.suits(suitability) {
        WEATHER_MATCH_BONUS
    } else {
        0
    };

    let meal_type_bonus = match context.filters.meal_type() {
        Some(meal) if recipe.serves(meal) => MEAL_TYPE_MATCH_BONUS,
        _ => 0,
    };

    let cuisine_bonus = match context.filters.cuisine() {
        Some(cuisine) if cuisine == recipe.cuisine => CUISINE_MATCH_BONUS,
        _ => 0,
    };

    ScoreBreakdown {
        cuisine_affinity: preferences.cuisine_score(&recipe.cuisine),
        tag_affinity: preferences.tags_score(&recipe.tags),
        weather_bonus,
        meal_type_bonus,
        cuisine_bonus,
    }
}

/// Ranks catalog recipes for a scoring context.
///
/// ## Performance Note
/// Breakdowns are computed with rayon; `collect` keeps candidate order, so
/// the output is deterministic.
pub struct RecipeScorer {
    filter_pipeline: FilterPipeline,
}

impl RecipeScorer {
    /// Scorer with the standard pipeline (exclusions only).
    pub fn new() -> Self {
        Self::with_pipeline(FilterPipeline::new().add_filter(ExclusionFilter))
    }

    /// Scorer with a caller-supplied filter pipeline.
    pub fn with_pipeline(filter_pipeline: FilterPipeline) -> Self {
        Self { filter_pipeline }
    }

    /// Rank every eligible recipe in the catalog.
    ///
    /// ## Algorithm
    /// 1. Map the weather observation to a suitability tag (once)
    /// 2. Turn the catalog into candidates, in catalog order
    /// 3. Run the filter pipeline (drops excluded ids)
    /// 4. Score the survivors
    /// 5. Sort by score DESC, then catalog index ASC
    ///
    /// Returns an empty list when nothing is eligible. Never fails.
    #[instrument(skip_all, fields(catalog_size = catalog.len(), excluded = context.excluded.len()))]
    pub fn rank<'c>(
        &self,
        catalog: &'c RecipeCatalog,
        context: &ScoringContext<'_>,
    ) -> Vec<ScoredRecipe<'c>> {
        let suitability = map_suitability(context.weather);
        debug!("Weather suitability for this run: {}", suitability);

        let candidates: Vec<Candidate> = catalog
            .recipes()
            .iter()
            .enumerate()
            .map(|(index, recipe)| Candidate::new(recipe.id.clone(), index))
            .collect();

        let candidates = self.filter_pipeline.apply(candidates, context);

        let recipes = catalog.recipes();
        let mut scored: Vec<ScoredRecipe<'c>> = candidates
            .par_iter()
            .map(|candidate| {
                let recipe = &recipes[candidate.catalog_index];
                let breakdown = score_recipe(recipe, suitability, context);
                ScoredRecipe {
                    recipe,
                    catalog_index: candidate.catalog_index,
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.catalog_index.cmp(&b.catalog_index))
        });

        debug!("Ranked {} candidates", scored.len());
        scored
    }
}

impl Default for RecipeScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::RecipeId;
    use preferences::{Feedback, RecommendationFilters};
    use std::collections::HashSet;
    use weather_client::WeatherObservation;

    fn recipe(
        id: u64,
        cuisine: &str,
        meals: &[&str],
        tags: &[&str],
        weather: &[SuitabilityTag],
    ) -> Recipe {
        Recipe {
            id: RecipeId::Int(id),
            name: format!("Recipe {}", id),
            cuisine: cuisine.to_string(),
            meal_type: meals.iter().map(|s| s.to_string()).collect(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            weather_suitability: weather.to_vec(),
        }
    }

    fn create_test_catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(vec![
            recipe(1, "italian", &["dinner"], &["pasta"], &[SuitabilityTag::Cold]),
            recipe(2, "thai", &["lunch"], &["spicy", "soup"], &[SuitabilityTag::Rainy]),
            recipe(3, "italian", &["lunch", "dinner"], &["pizza"], &[SuitabilityTag::Any]),
        ])
        .unwrap()
    }

    #[test]
    fn test_breakdown_components() {
        let filters = RecommendationFilters::new()
            .with_meal_type("dinner")
            .with_cuisine("italian");
        let excluded = HashSet::new();
        let mut prefs = PreferenceModel::new();
        prefs.record_feedback(
            &recipe(9, "italian", &[], &["pasta"], &[]),
            Feedback::Like,
        );
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let catalog = create_test_catalog();
        let breakdown = score_recipe(
            catalog.get_recipe(&RecipeId::Int(1)).unwrap(),
            SuitabilityTag::Cold,
            &context,
        );

        assert_eq!(
            breakdown,
            ScoreBreakdown {
                cuisine_affinity: 2,
                tag_affinity: 1,
                weather_bonus: 5,
                meal_type_bonus: 10,
                cuisine_bonus: 10,
            }
        );
        assert_eq!(breakdown.total(), 28);
    }

    #[test]
    fn test_no_filters_no_preferences_scores_weather_only() {
        let filters = RecommendationFilters::new();
        let excluded = HashSet::new();
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let catalog = create_test_catalog();
        let ranked = RecipeScorer::new().rank(&catalog, &context);

        // No weather -> "any"; only recipe 3 carries the wildcard
        let scores: Vec<(RecipeId, u32)> =
            ranked.iter().map(|s| (s.recipe.id.clone(), s.score)).collect();
        assert_eq!(
            scores,
            vec![(RecipeId::Int(3), 5), (RecipeId::Int(1), 0), (RecipeId::Int(2), 0)]
        );
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let filters = RecommendationFilters::new().with_meal_type("lunch");
        let excluded = HashSet::new();
        let prefs = PreferenceModel::new();
        let rain = WeatherObservation::new("Leeds", Some("Rain"), Some(12.0));
        let context = ScoringContext::new(&filters, &excluded, &prefs, Some(&rain));

        let catalog = create_test_catalog();
        let ranked = RecipeScorer::new().rank(&catalog, &context);

        // Recipe 2: lunch + rainy = 15; recipe 3: lunch + any = 15; recipe 1: 0
        let ids: Vec<&RecipeId> = ranked.iter().map(|s| &s.recipe.id).collect();
        assert_eq!(ids, vec![&RecipeId::Int(2), &RecipeId::Int(3), &RecipeId::Int(1)]);
        assert_eq!(ranked[0].score, ranked[1].score);
    }

    #[test]
    fn test_cuisine_filter_is_exact() {
        let filters = RecommendationFilters::new().with_cuisine("Italian");
        let excluded = HashSet::new();
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let catalog = create_test_catalog();
        let ranked = RecipeScorer::new().rank(&catalog, &context);

        assert!(ranked.iter().all(|s| s.breakdown.cuisine_bonus == 0));
    }

    #[test]
    fn test_empty_catalog() {
        let filters = RecommendationFilters::new();
        let excluded = HashSet::new();
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let catalog = RecipeCatalog::new();
        assert!(RecipeScorer::new().rank(&catalog, &context).is_empty());
    }
}
