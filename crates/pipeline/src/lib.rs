//! Pipeline for filtering and scoring recipe candidates.
//!
//! This crate provides:
//! - Suitability mapping from a weather observation to a coarse tag
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - RecipeScorer for ranking the remaining candidates
//!
//! ## Architecture
//! A ranking run processes candidates in stages:
//! 1. The weather observation is mapped to a suitability tag
//! 2. Filters remove ineligible candidates (disliked, already seen)
//! 3. The scorer adds preference, weather and filter-match points
//! 4. Candidates are sorted by score, catalog order breaking ties
//!
//! Nothing in this crate performs I/O; the weather observation arrives
//! precomputed in the `ScoringContext`.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{RecipeScorer, ScoringContext};
//!
//! let excluded = exclusions.excluded();
//! let context = ScoringContext::new(&filters, &excluded, &preferences, weather.as_ref());
//!
//! let ranked = RecipeScorer::new().rank(&catalog, &context);
//! ```

pub mod context;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod scorer;
pub mod suitability;

// Re-export main types
pub use context::{Candidate, ScoringContext};
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use scorer::{
    RecipeScorer, ScoreBreakdown, ScoredRecipe, score_recipe, CUISINE_MATCH_BONUS,
    MEAL_TYPE_MATCH_BONUS, WEATHER_MATCH_BONUS,
};
pub use suitability::map_suitability;
