//! Parser for the recipe catalog file.
//!
//! The catalog is a JSON array of records:
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "name": "Spaghetti Carbonara",
//!     "cuisine": "italian",
//!     "meal_type": ["lunch", "dinner"],
//!     "tags": ["pasta", "comfort-food"],
//!     "weather_suitability": ["cold", "rainy"]
//!   }
//! ]
//! ```
//!
//! Ids may be JSON integers or strings (`"id": "carbonara"`).
//!
//! Records are decoded into a raw shape first so that an unknown weather
//! suitability value can be reported against the recipe that carries it.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// A catalog record exactly as it appears in the file
#[derive(Debug, Deserialize)]
struct RawRecipe {
    id: RecipeId,
    name: String,
    cuisine: String,
    #[serde(default)]
    meal_type: Vec<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    weather_suitability: Vec<String>,
}

/// Parse the catalog file at `path`
pub fn parse_recipes(path: &Path) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_recipes_str(&content, &file_name)
}

/// Parse catalog JSON that has already been read into memory.
///
/// `source` is only used to label errors.
pub fn parse_recipes_str(content: &str, source: &str) -> Result<Vec<Recipe>> {
    let raw: Vec<RawRecipe> =
        serde_json::from_str(content).map_err(|e| DataLoadError::ParseError {
            file: source.to_string(),
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        })?;

    raw.into_iter().map(into_recipe).collect()
}

fn into_recipe(raw: RawRecipe) -> Result<Recipe> {
    let weather_suitability = parse_suitability_tags(&raw.id, &raw.weather_suitability)?;

    Ok(Recipe {
        id: raw.id,
        name: raw.name,
        cuisine: raw.cuisine,
        meal_type: raw.meal_type,
        tags: raw.tags,
        weather_suitability,
    })
}

/// Parse the weather suitability list of one recipe
///
/// Example: ["cold", "rainy"] -> vec![SuitabilityTag::Cold, SuitabilityTag::Rainy]
fn parse_suitability_tags(recipe_id: &RecipeId, values: &[String]) -> Result<Vec<SuitabilityTag>> {
    values
        .iter()
        .map(|v| {
            v.parse::<SuitabilityTag>()
                .map_err(|_| DataLoadError::InvalidValue {
                    recipe_id: recipe_id.clone(),
                    field: "weather_suitability".to_string(),
                    value: v.clone(),
                })
        })
        .collect()
}
