//! Interactive session state.
//!
//! A session has either no active recommendation or exactly one. All state
//! lives in [`Session`] and is passed explicitly into each operation.

use std::collections::HashSet;

use tracing::{debug, info};

use data_loader::{RecipeCatalog, RecipeId};
use preferences::{ExclusionSets, Feedback, FilterKey, PreferenceModel, RecommendationFilters};
use weather_client::WeatherObservation;

use crate::recommender::{MealRecommendation, RecommendationEngine};

/// Result of asking for the next dish
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Suggested(MealRecommendation),
    /// Nothing eligible; the seen set has been cleared
    Exhausted,
}

/// Result of a like
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked(RecipeId),
    /// The active recipe was already in the liked list
    AlreadyLiked(RecipeId),
    NoActiveRecommendation,
}

/// Per-user state for one run of the frontend
#[derive(Debug, Default)]
pub struct Session {
    preferences: PreferenceModel,
    exclusions: ExclusionSets,
    liked: Vec<RecipeId>,
    active: Option<MealRecommendation>,
    last_filter_key: Option<FilterKey>,
    weather: Option<WeatherObservation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferences(&self) -> &PreferenceModel {
        &self.preferences
    }

    pub fn exclusions(&self) -> &ExclusionSets {
        &self.exclusions
    }

    /// Liked ids in the order they were liked
    pub fn liked(&self) -> &[RecipeId] {
        &self.liked
    }

    pub fn active(&self) -> Option<&MealRecommendation> {
        self.active.as_ref()
    }

    /// Weather seen by the most recent request
    pub fn weather(&self) -> Option<&WeatherObservation> {
        self.weather.as_ref()
    }

    /// Track the meal-type/cuisine combination. Returns true when it changed
    /// and the seen set was reset.
    pub fn sync_filters(&mut self, filters: &RecommendationFilters) -> bool {
        let key = filters.filter_key();
        if self.last_filter_key.as_ref() == Some(&key) {
            return false;
        }

        let first = self.last_filter_key.is_none();
        self.last_filter_key = Some(key);
        self.exclusions.reset_seen();
        if !first {
            debug!("Filters changed, seen set cleared");
        }
        true
    }

    /// Fetch the next recommendation and make it active
    pub async fn request_suggestion(
        &mut self,
        engine: &RecommendationEngine,
        filters: &RecommendationFilters,
    ) -> SuggestionOutcome {
        self.sync_filters(filters);

        let excluded: HashSet<RecipeId> = self.exclusions.excluded();
        let outcome = engine
            .get_recommendations(filters, &excluded, &self.preferences)
            .await;
        self.weather = outcome.weather;

        match outcome.recommendations.into_iter().next() {
            Some(top) => {
                self.exclusions.mark_seen(top.recipe_id.clone());
                info!("Suggesting {} ({}) with score {}", top.name, top.recipe_id, top.score);
                self.active = Some(top.clone());
                SuggestionOutcome::Suggested(top)
            }
            None => {
                info!("No more recommendations, clearing seen set");
                self.active = None;
                self.exclusions.reset_seen();
                SuggestionOutcome::Exhausted
            }
        }
    }

    /// Like the active recommendation. It stays active.
    pub fn like(&mut self, catalog: &RecipeCatalog) -> LikeOutcome {
        let Some(id) = self.active.as_ref().map(|r| r.recipe_id.clone()) else {
            return LikeOutcome::NoActiveRecommendation;
        };

        if let Some(recipe) = catalog.get_recipe(&id) {
            self.preferences.record_feedback(recipe, Feedback::Like);
        }

        if self.liked.contains(&id) {
            LikeOutcome::AlreadyLiked(id)
        } else {
            self.liked.push(id.clone());
            LikeOutcome::Liked(id)
        }
    }

    /// Dislike the active recommendation and move straight on to the next
    /// one. Returns `None` when nothing was active.
    pub async fn dislike(
        &mut self,
        engine: &RecommendationEngine,
        filters: &RecommendationFilters,
    ) -> Option<SuggestionOutcome> {
        let active = self.active.take()?;
        let id = active.recipe_id;

        if self.exclusions.mark_disliked(id.clone()) {
            debug!("Recipe {} disliked", id);
        }
        self.liked.retain(|liked| *liked != id);
        if let Some(recipe) = engine.catalog().get_recipe(&id) {
            self.preferences.record_feedback(recipe, Feedback::Dislike);
        }

        Some(self.request_suggestion(engine, filters).await)
    }

    /// Names of liked recipes, in like order
    pub fn liked_names<'c>(&self, catalog: &'c RecipeCatalog) -> Vec<&'c str> {
        catalog.names_for(&self.liked)
    }
}
