//! What the user asked for: meal type, cuisine and city.
//!
//! Every field is optional. Empty or whitespace-only input is the same as
//! not choosing, so "" never filters anything.

use serde::{Deserialize, Serialize};

/// The meal-type + cuisine pair that scopes the seen set.
///
/// City is deliberately absent: moving to another city re-weights weather
/// but does not reset which dishes have been shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterKey {
    pub meal_type: Option<String>,
    pub cuisine: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFilters {
    pub meal_type: Option<String>,
    pub cuisine: Option<String>,
    pub city: Option<String>,
}

impl RecommendationFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = normalize(Some(meal_type.into()));
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = normalize(Some(cuisine.into()));
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = normalize(Some(city.into()));
        self
    }

    /// Build filters from raw optional input, dropping blank values
    pub fn from_parts(
        meal_type: Option<String>,
        cuisine: Option<String>,
        city: Option<String>,
    ) -> Self {
        Self {
            meal_type: normalize(meal_type),
            cuisine: normalize(cuisine),
            city: normalize(city),
        }
    }

    pub fn meal_type(&self) -> Option<&str> {
        self.meal_type.as_deref()
    }

    pub fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn filter_key(&self) -> FilterKey {
        FilterKey {
            meal_type: self.meal_type.clone(),
            cuisine: self.cuisine.clone(),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
