//! # Recommendation Engine
//!
//! This module coordinates one recommendation request:
//! 1. Look up the weather for the chosen city (if any)
//! 2. Build the scoring context (filters, exclusions, preferences, weather)
//! 3. Rank the catalog with the pipeline scorer
//! 4. Convert the ranking into owned recommendations for the frontend
//!
//! The weather lookup is the only step that waits on I/O and it cannot
//! fail: a provider problem shows up as "no observation" and ranking falls
//! back to the neutral `any` suitability.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use data_loader::{RecipeCatalog, RecipeId, SuitabilityTag};
use pipeline::{map_suitability, RecipeScorer, ScoreBreakdown, ScoredRecipe, ScoringContext};
use preferences::{PreferenceModel, RecommendationFilters};
use weather_client::{WeatherObservation, WeatherProvider};

/// Final recommendation returned to the frontend
#[derive(Debug, Clone, PartialEq)]
pub struct MealRecommendation {
    pub recipe_id: RecipeId,
    pub name: String,
    pub cuisine: String,
    pub meal_type: Vec<String>,
    pub tags: Vec<String>,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Ranked recommendations plus the weather that shaped them
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    /// Highest score first; empty when nothing is eligible
    pub recommendations: Vec<MealRecommendation>,
    pub weather: Option<WeatherObservation>,
    pub suitability: SuitabilityTag,
}

/// Main engine that ties the catalog, weather lookup and scorer together
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Arc<RecipeCatalog>,
    weather: Arc<dyn WeatherProvider>,
    scorer: Arc<RecipeScorer>,
}

impl RecommendationEngine {
    /// Create an engine over an already loaded catalog
    pub fn new(catalog: Arc<RecipeCatalog>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self {
            catalog,
            weather,
            scorer: Arc::new(RecipeScorer::new()),
        }
    }

    /// Load the catalog from `path` and build an engine around it
    pub fn load(path: &Path, weather: Arc<dyn WeatherProvider>) -> Result<Self> {
        let catalog = RecipeCatalog::load_from_file(path)
            .with_context(|| format!("Failed to load recipe catalog from {}", path.display()))?;
        Ok(Self::new(Arc::new(catalog), weather))
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Current weather for `city`; no city means no lookup
    pub async fn fetch_weather(&self, city: Option<&str>) -> Option<WeatherObservation> {
        let city = city?;
        let observation = self.weather.current_weather(city).await;
        match &observation {
            Some(o) => info!(
                "Weather in {}: {} / {}",
                o.city_name,
                o.condition.as_deref().unwrap_or("unknown"),
                o.temperature_celsius
                    .map(|t| format!("{:.1}°C", t))
                    .unwrap_or_else(|| "unknown".to_string())
            ),
            None => info!("No weather info available for {}", city),
        }
        observation
    }

    /// Main entry point: rank the catalog for one request
    ///
    /// # Arguments
    /// * `filters` - Meal type, cuisine and city chosen by the user
    /// * `excluded` - Ids to skip (disliked ∪ seen)
    /// * `preferences` - Learned affinities
    pub async fn get_recommendations(
        &self,
        filters: &RecommendationFilters,
        excluded: &HashSet<RecipeId>,
        preferences: &PreferenceModel,
    ) -> RecommendationOutcome {
        let weather = self.fetch_weather(filters.city()).await;
        self.recommend_with_weather(filters, excluded, preferences, weather)
    }

    /// Rank with a weather observation obtained elsewhere. Performs no I/O.
    pub fn recommend_with_weather(
        &self,
        filters: &RecommendationFilters,
        excluded: &HashSet<RecipeId>,
        preferences: &PreferenceModel,
        weather: Option<WeatherObservation>,
    ) -> RecommendationOutcome {
        let start_time = Instant::now();
        info!(
            "Fetching recommendations (meal type: {:?}, cuisine: {:?}, excluding {} ids)",
            filters.meal_type(),
            filters.cuisine(),
            excluded.len()
        );

        let suitability = map_suitability(weather.as_ref());
        let context = ScoringContext::new(filters, excluded, preferences, weather.as_ref());
        let ranked = self.scorer.rank(&self.catalog, &context);

        let recommendations: Vec<MealRecommendation> = ranked
            .iter()
            .map(|scored| to_recommendation(scored, suitability, filters))
            .collect();

        debug!(
            "Ranked {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );

        RecommendationOutcome {
            recommendations,
            weather,
            suitability,
        }
    }
}

fn to_recommendation(
    scored: &ScoredRecipe<'_>,
    suitability: SuitabilityTag,
    filters: &RecommendationFilters,
) -> MealRecommendation {
    let recipe = scored.recipe;
    MealRecommendation {
        recipe_id: recipe.id.clone(),
        name: recipe.name.clone(),
        cuisine: recipe.cuisine.clone(),
        meal_type: recipe.meal_type.clone(),
        tags: recipe.tags.clone(),
        score: scored.score,
        breakdown: scored.breakdown,
        explanation: explain(&scored.breakdown, suitability, filters),
    }
}

/// Human-readable list of the components that scored
fn explain(
    breakdown: &ScoreBreakdown,
    suitability: SuitabilityTag,
    filters: &RecommendationFilters,
) -> String {
    let mut parts = Vec::new();
    if breakdown.cuisine_affinity > 0 {
        parts.push(format!("liked cuisine +{}", breakdown.cuisine_affinity));
    }
    if breakdown.tag_affinity > 0 {
        parts.push(format!("liked tags +{}", breakdown.tag_affinity));
    }
    if breakdown.weather_bonus > 0 {
        parts.push(format!("suits {} weather +{}", suitability, breakdown.weather_bonus));
    }
    if breakdown.meal_type_bonus > 0 {
        parts.push(format!(
            "{} +{}",
            filters.meal_type().unwrap_or("meal type"),
            breakdown.meal_type_bonus
        ));
    }
    if breakdown.cuisine_bonus > 0 {
        parts.push(format!(
            "{} cuisine +{}",
            filters.cuisine().unwrap_or("chosen"),
            breakdown.cuisine_bonus
        ));
    }

    if parts.is_empty() {
        format!("Score: {} (no matching signals)", breakdown.total())
    } else {
        format!("Score: {} ({})", breakdown.total(), parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_test_catalog, id, StubWeather};
    use preferences::Feedback;

    fn build_test_engine(weather: StubWeather) -> (RecommendationEngine, Arc<StubWeather>) {
        let weather = Arc::new(weather);
        let engine = RecommendationEngine::new(Arc::new(build_test_catalog()), weather.clone());
        (engine, weather)
    }

    // ============================================================================
    // Weather lookup
    // ============================================================================

    #[tokio::test]
    async fn test_no_city_skips_weather_lookup() {
        let (engine, weather) = build_test_engine(StubWeather::hot());

        let outcome = engine
            .get_recommendations(
                &RecommendationFilters::new().with_meal_type("dinner"),
                &HashSet::new(),
                &PreferenceModel::new(),
            )
            .await;

        assert_eq!(weather.calls(), 0, "No city means no weather call");
        assert!(outcome.weather.is_none());
        assert_eq!(outcome.suitability, SuitabilityTag::Any);
    }

    #[tokio::test]
    async fn test_city_drives_suitability() {
        let (engine, weather) = build_test_engine(StubWeather::hot());

        let filters = RecommendationFilters::new()
            .with_meal_type("dinner")
            .with_city("Seville");
        let outcome = engine
            .get_recommendations(&filters, &HashSet::new(), &PreferenceModel::new())
            .await;

        assert_eq!(weather.calls(), 1);
        assert_eq!(outcome.suitability, SuitabilityTag::Hot);
        assert_eq!(outcome.weather.as_ref().map(|w| w.city_name.as_str()), Some("Seville"));

        let ranked: Vec<(RecipeId, u32)> = outcome
            .recommendations
            .iter()
            .map(|r| (r.recipe_id.clone(), r.score))
            .collect();
        assert_eq!(ranked, vec![(id(1), 15), (id(2), 5)]);
    }

    #[tokio::test]
    async fn test_failed_lookup_falls_back_to_any() {
        let (engine, weather) = build_test_engine(StubWeather::failing());

        let filters = RecommendationFilters::new()
            .with_meal_type("dinner")
            .with_city("Nowhere");
        let outcome = engine
            .get_recommendations(&filters, &HashSet::new(), &PreferenceModel::new())
            .await;

        assert_eq!(weather.calls(), 1);
        assert!(outcome.weather.is_none());
        assert_eq!(outcome.suitability, SuitabilityTag::Any);
        // Pasta keeps its wildcard bonus, the hot-only salad scores nothing
        assert_eq!(outcome.recommendations[0].score, 15);
        assert_eq!(outcome.recommendations[1].score, 0);
    }

    // ============================================================================
    // Ranking and explanations
    // ============================================================================

    #[test]
    fn test_recommend_with_weather_respects_exclusions() {
        let (engine, _) = build_test_engine(StubWeather::hot());

        let outcome = engine.recommend_with_weather(
            &RecommendationFilters::new(),
            &HashSet::from([id(1)]),
            &PreferenceModel::new(),
            None,
        );

        assert_eq!(outcome.recommendations.len(), 1);
        assert_eq!(outcome.recommendations[0].recipe_id, id(2));
    }

    #[test]
    fn test_explanation_lists_scoring_components() {
        let (engine, _) = build_test_engine(StubWeather::hot());
        let mut prefs = PreferenceModel::new();
        prefs.record_feedback(engine.catalog().get_recipe(&id(2)).unwrap(), Feedback::Like);

        let observation = WeatherObservation::new("Seville", Some("Clear"), Some(31.0));
        let outcome = engine.recommend_with_weather(
            &RecommendationFilters::new().with_cuisine("thai"),
            &HashSet::new(),
            &prefs,
            Some(observation),
        );

        let salad = &outcome.recommendations[0];
        assert_eq!(salad.recipe_id, id(2));
        assert_eq!(salad.score, 2 + 1 + 5 + 10);
        assert_eq!(
            salad.explanation,
            "Score: 18 (liked cuisine +2, liked tags +1, suits hot weather +5, thai cuisine +10)"
        );
    }

    #[test]
    fn test_explanation_without_signals() {
        let breakdown = ScoreBreakdown::default();
        let text = explain(&breakdown, SuitabilityTag::Any, &RecommendationFilters::new());
        assert_eq!(text, "Score: 0 (no matching signals)");
    }

    #[test]
    fn test_load_missing_catalog_fails_with_context() {
        let result = RecommendationEngine::load(
            Path::new("no/such/recipes.json"),
            Arc::new(StubWeather::failing()),
        );
        let err = result.err().expect("missing catalog must fail");
        assert!(err.to_string().contains("Failed to load recipe catalog"));
    }
}
