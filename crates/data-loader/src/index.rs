//! RecipeCatalog building and indexing logic.
//!
//! Builds the catalog from parsed records:
//! - Primary storage in catalog order plus an id -> position index
//! - Secondary indices (cuisine_index, meal_type_index)
//! - Integrity checks (unique ids, non-empty names)

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

impl RecipeCatalog {
    /// Load the recipe catalog from a JSON file
    ///
    /// This is the main entry point for loading data.
    ///
    /// Steps:
    /// 1. Parse the catalog file
    /// 2. Build the catalog (primary + secondary indices)
    /// 3. Validate data integrity
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading recipe catalog from {:?}", path);

        let recipes = parser::parse_recipes(path)?;
        let catalog = Self::from_recipes(recipes)?;

        info!(
            "Loaded {} recipes across {} cuisines",
            catalog.len(),
            catalog.cuisine_index.len()
        );
        Ok(catalog)
    }

    /// Build and validate a catalog from recipes already in memory.
    ///
    /// Recipe order is preserved.
    pub fn from_recipes(recipes: Vec<Recipe>) -> Result<Self> {
        let mut catalog = RecipeCatalog::new();
        for recipe in recipes {
            catalog.insert_recipe(recipe);
        }
        catalog.build_secondary_indices();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build secondary indices after primary data is loaded
    ///
    /// This creates the cuisine_index and meal_type_index for fast lookups.
    /// Ids inside each list follow catalog order.
    pub fn build_secondary_indices(&mut self) {
        self.cuisine_index.clear();
        self.meal_type_index.clear();

        for recipe in &self.recipes {
            self.cuisine_index
                .entry(recipe.cuisine.clone())
                .or_default()
                .push(recipe.id.clone());

            for meal in &recipe.meal_type {
                self.meal_type_index
                    .entry(meal.clone())
                    .or_default()
                    .push(recipe.id.clone());
            }
        }
    }

    /// Validate data integrity
    ///
    /// Check that:
    /// - No two recipes share an id
    /// - Every recipe has a name
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.recipes.len());
        for recipe in &self.recipes {
            if !seen.insert(&recipe.id) {
                return Err(DataLoadError::DuplicateId {
                    id: recipe.id.clone(),
                });
            }
            if recipe.name.trim().is_empty() {
                return Err(DataLoadError::InvalidValue {
                    recipe_id: recipe.id.clone(),
                    field: "name".to_string(),
                    value: recipe.name.clone(),
                });
            }
        }
        Ok(())
    }
}
