//! # Data Loader Crate
//!
//! This crate handles loading and indexing the static recipe catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Recipe, SuitabilityTag, RecipeCatalog)
//! - **parser**: Parse the catalog JSON into Rust structs
//! - **index**: Build lookup indices and validate the catalog
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{RecipeCatalog, RecipeId};
//! use std::path::Path;
//!
//! let catalog = RecipeCatalog::load_from_file(Path::new("data/recipes.json"))?;
//!
//! let recipe = catalog.get_recipe(&RecipeId::Int(1)).unwrap();
//! let thai = catalog.get_recipes_by_cuisine("thai");
//!
//! println!("{} is one of {} thai dishes", recipe.name, thai.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Core types
    RecipeId,
    Recipe,
    RecipeCatalog,
    // Enums
    SuitabilityTag,
};
