//! Engine crate for the meal recommender.
//!
//! This crate contains the recommendation engine that coordinates the
//! weather lookup and the pipeline scorer, and the interactive session
//! state built on top of it.

pub mod recommender;
pub mod session;

pub use recommender::{MealRecommendation, RecommendationEngine, RecommendationOutcome};
pub use session::{LikeOutcome, Session, SuggestionOutcome};

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use data_loader::{Recipe, RecipeCatalog, RecipeId, SuitabilityTag};
    use weather_client::{WeatherObservation, WeatherProvider};

    /// Provider returning a fixed observation and counting lookups
    pub struct StubWeather {
        observation: Option<(Option<&'static str>, Option<f64>)>,
        calls: AtomicUsize,
    }

    impl StubWeather {
        pub fn hot() -> Self {
            Self {
                observation: Some((Some("Clear"), Some(30.0))),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                observation: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WeatherProvider for StubWeather {
        async fn current_weather(&self, city: &str) -> Option<WeatherObservation> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.observation
                .map(|(condition, temp)| WeatherObservation::new(city, condition, temp))
        }
    }

    pub fn id(n: u64) -> RecipeId {
        RecipeId::Int(n)
    }

    /// Pasta (italian dinner, any weather) and salad (thai lunch, hot)
    pub fn build_test_catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(vec![
            Recipe {
                id: RecipeId::Int(1),
                name: "Penne all'Arrabbiata".to_string(),
                cuisine: "italian".to_string(),
                meal_type: vec!["dinner".to_string()],
                tags: vec!["pasta".to_string()],
                weather_suitability: vec![SuitabilityTag::Any],
            },
            Recipe {
                id: RecipeId::Int(2),
                name: "Som Tam".to_string(),
                cuisine: "thai".to_string(),
                meal_type: vec!["lunch".to_string()],
                tags: vec!["spicy".to_string()],
                weather_suitability: vec![SuitabilityTag::Hot],
            },
        ])
        .expect("test catalog is valid")
    }
}
