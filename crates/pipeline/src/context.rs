//! Inputs shared by every stage of a scoring run.

use data_loader::RecipeId;
use preferences::{PreferenceModel, RecommendationFilters};
use std::collections::HashSet;
use weather_client::WeatherObservation;

/// A recipe still in the running, identified by id and catalog position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub recipe_id: RecipeId,
    /// Position in catalog order, used to break score ties
    pub catalog_index: usize,
}

impl Candidate {
    pub fn new(recipe_id: RecipeId, catalog_index: usize) -> Self {
        Self {
            recipe_id,
            catalog_index,
        }
    }
}

/// Everything a scoring run reads besides the catalog.
///
/// The weather observation is fetched upstream; scoring itself does no I/O.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub filters: &'a RecommendationFilters,
    /// Ids to skip entirely (disliked ∪ seen)
    pub excluded: &'a HashSet<RecipeId>,
    pub preferences: &'a PreferenceModel,
    pub weather: Option<&'a WeatherObservation>,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        filters: &'a RecommendationFilters,
        excluded: &'a HashSet<RecipeId>,
        preferences: &'a PreferenceModel,
        weather: Option<&'a WeatherObservation>,
    ) -> Self {
        Self {
            filters,
            excluded,
            preferences,
            weather,
        }
    }
}
