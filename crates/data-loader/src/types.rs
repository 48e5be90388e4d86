//! Core domain types for the recipe catalog.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - `RecipeId`, an integer or string identifier
//! - `SuitabilityTag` for the coarse weather categories a recipe suits
//! - `Recipe`, the immutable catalog record
//! - `RecipeCatalog`, the in-memory catalog with its lookup indices

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Recipe Identifiers
// =============================================================================

/// Unique, stable identifier for a recipe.
///
/// Catalogs may use either JSON integers or strings for ids, so both forms
/// are accepted. `7` and `"7"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Int(u64),
    Str(String),
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Int(n) => write!(f, "{}", n),
            RecipeId::Str(s) => f.write_str(s),
        }
    }
}

impl From<u64> for RecipeId {
    fn from(id: u64) -> Self {
        RecipeId::Int(id)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        RecipeId::Str(id.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        RecipeId::Str(id)
    }
}

// =============================================================================
// Weather Suitability
// =============================================================================

/// Coarse weather category a recipe is suited to.
///
/// `Any` plays two roles: on a recipe it is a wildcard that matches every
/// weather condition, and it is the neutral output when the weather gives
/// no specific signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityTag {
    Rainy,
    Cold,
    Hot,
    Any,
}

impl SuitabilityTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuitabilityTag::Rainy => "rainy",
            SuitabilityTag::Cold => "cold",
            SuitabilityTag::Hot => "hot",
            SuitabilityTag::Any => "any",
        }
    }
}

impl fmt::Display for SuitabilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuitabilityTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rainy" => Ok(SuitabilityTag::Rainy),
            "cold" => Ok(SuitabilityTag::Cold),
            "hot" => Ok(SuitabilityTag::Hot),
            "any" => Ok(SuitabilityTag::Any),
            other => Err(format!("unknown suitability tag '{}'", other)),
        }
    }
}

// =============================================================================
// Recipe
// =============================================================================

/// A single dish from the catalog.
///
/// Recipes are loaded once at startup and never mutated afterwards; the rest
/// of the system only ever borrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub cuisine: String,
    /// Meals this dish is served at (breakfast, lunch, dinner, snack)
    pub meal_type: Vec<String>,
    /// Free-form descriptors such as "spicy" or "comfort-food"
    pub tags: Vec<String>,
    pub weather_suitability: Vec<SuitabilityTag>,
}

impl Recipe {
    /// True when this recipe suits the given weather category.
    ///
    /// A recipe tagged `any` matches every category.
    pub fn suits(&self, tag: SuitabilityTag) -> bool {
        self.weather_suitability
            .iter()
            .any(|&t| t == tag || t == SuitabilityTag::Any)
    }

    /// True when `meal_type` is one of the meals this recipe is served at
    pub fn serves(&self, meal_type: &str) -> bool {
        self.meal_type.iter().any(|m| m == meal_type)
    }
}

// =============================================================================
// RecipeCatalog - The In-Memory Recipe Store
// =============================================================================

/// Holds every recipe in catalog order plus the indices used for lookups.
///
/// Catalog order matters: the scorer breaks ties by it, so recipes are kept
/// in a `Vec` and the id index only stores positions into that vector.
#[derive(Debug)]
pub struct RecipeCatalog {
    // Primary data store, in file order
    pub(crate) recipes: Vec<Recipe>,
    /// Position of each recipe in `recipes`
    pub(crate) positions: HashMap<RecipeId, usize>,

    // Secondary indices for specialized queries
    /// Recipes grouped by cuisine (sorted by cuisine name)
    pub(crate) cuisine_index: BTreeMap<String, Vec<RecipeId>>,
    /// Recipes grouped by meal type (one recipe can appear in several lists)
    pub(crate) meal_type_index: HashMap<String, Vec<RecipeId>>,
}

impl RecipeCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
            positions: HashMap::new(),
            cuisine_index: BTreeMap::new(),
            meal_type_index: HashMap::new(),
        }
    }

    /// Get a recipe by ID
    pub fn get_recipe(&self, id: &RecipeId) -> Option<&Recipe> {
        self.positions.get(id).map(|&pos| &self.recipes[pos])
    }

    /// Position of a recipe in catalog order
    pub fn position(&self, id: &RecipeId) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// All recipes in catalog order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct cuisines, sorted alphabetically
    pub fn cuisines(&self) -> Vec<&str> {
        self.cuisine_index.keys().map(|c| c.as_str()).collect()
    }

    /// Get all recipes of a specific cuisine
    pub fn get_recipes_by_cuisine(&self, cuisine: &str) -> &[RecipeId] {
        self.cuisine_index
            .get(cuisine)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Get all recipes served at a specific meal
    pub fn get_recipes_by_meal_type(&self, meal_type: &str) -> &[RecipeId] {
        self.meal_type_index
            .get(meal_type)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Names of the given recipes, in the order of `ids`.
    ///
    /// Unknown ids are skipped.
    pub fn names_for(&self, ids: &[RecipeId]) -> Vec<&str> {
        ids.iter()
            .filter_map(|id| self.get_recipe(id))
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Insert a recipe at the end of the catalog.
    ///
    /// The first recipe with a given id wins the id index; `validate` reports
    /// any later duplicate.
    pub fn insert_recipe(&mut self, recipe: Recipe) {
        let pos = self.recipes.len();
        self.positions.entry(recipe.id.clone()).or_insert(pos);
        self.recipes.push(recipe);
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::new()
    }
}
