//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::context::{Candidate, ScoringContext};
use crate::traits::Filter;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(ExclusionFilter);
///
/// let remaining = pipeline.apply(candidates, &context);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Each filter sees the output of the previous one; counts before and
    /// after every filter are logged at debug level.
    pub fn apply(&self, candidates: Vec<Candidate>, context: &ScoringContext<'_>) -> Vec<Candidate> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, context);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ExclusionFilter;
    use data_loader::RecipeId;
    use preferences::{PreferenceModel, RecommendationFilters};
    use std::collections::HashSet;

    struct KeepEven;

    impl Filter for KeepEven {
        fn name(&self) -> &str {
            "KeepEven"
        }

        fn apply(&self, candidates: Vec<Candidate>, _context: &ScoringContext<'_>) -> Vec<Candidate> {
            candidates
                .into_iter()
                .filter(|c| matches!(c.recipe_id, RecipeId::Int(n) if n % 2 == 0))
                .collect()
        }
    }

    fn candidates() -> Vec<Candidate> {
        (1..=4u64)
            .map(|n| Candidate::new(RecipeId::Int(n), n as usize - 1))
            .collect()
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let filters = RecommendationFilters::new();
        let excluded = HashSet::new();
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let filtered = pipeline.apply(candidates(), &context);
        assert_eq!(filtered.len(), 4);
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_filters_run_in_sequence() {
        let filters = RecommendationFilters::new();
        let excluded = HashSet::from([RecipeId::Int(4)]);
        let prefs = PreferenceModel::new();
        let context = ScoringContext::new(&filters, &excluded, &prefs, None);

        let pipeline = FilterPipeline::new()
            .add_filter(ExclusionFilter)
            .add_filter(KeepEven);

        let filtered = pipeline.apply(candidates(), &context);
        assert_eq!(pipeline.len(), 2);
        assert_eq!(filtered, vec![Candidate::new(RecipeId::Int(2), 1)]);
    }
}
