//! Filter to remove recipes the user disliked or has already been shown.
//!
//! This is the first filter in the pipeline, as an excluded recipe must
//! never reach scoring.

use crate::context::{Candidate, ScoringContext};
use crate::traits::Filter;

/// Removes candidates whose id is in the context's exclusion set.
///
/// ## Algorithm
/// Uses the HashSet in ScoringContext.excluded for O(1) lookups.
pub struct ExclusionFilter;

impl Filter for ExclusionFilter {
    fn name(&self) -> &str {
        "ExclusionFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, context: &ScoringContext<'_>) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| !context.excluded.contains(&candidate.recipe_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::RecipeId;
    use preferences::{PreferenceModel, RecommendationFilters};
    use std::collections::HashSet;

    #[test]
    fn test_exclusion_filter() {
        let filters = RecommendationFilters::new();
        let excluded = HashSet::from([RecipeId::Int(100), RecipeId::from("curry")]);
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let candidates = vec![
            Candidate::new(RecipeId::Int(100), 0),
            Candidate::new(RecipeId::Int(101), 1),
            Candidate::new(RecipeId::from("curry"), 2),
            Candidate::new(RecipeId::from("100"), 3),
        ];

        let filtered = ExclusionFilter.apply(candidates, &context);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].recipe_id, RecipeId::Int(101));
        // A string id never matches the integer id with the same digits
        assert_eq!(filtered[1].recipe_id, RecipeId::from("100"));
    }

    #[test]
    fn test_everything_excluded() {
        let filters = RecommendationFilters::new();
        let excluded = HashSet::from([RecipeId::Int(1), RecipeId::Int(2)]);
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let candidates = vec![
            Candidate::new(RecipeId::Int(1), 0),
            Candidate::new(RecipeId::Int(2), 1),
        ];
        let filtered = ExclusionFilter.apply(candidates, &context);
        assert!(filtered.is_empty());
    }
}
