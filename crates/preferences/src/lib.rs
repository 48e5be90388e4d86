//! # Preferences Crate
//!
//! Per-session state that shapes recommendations.
//!
//! ## Components
//!
//! ### Preference Model
//! Additive affinities learned from likes:
//! - cuisine -> score (+2 per like)
//! - tag -> score (+1 per like, per tag)
//!
//! ### Exclusion Sets
//! Recipes that must be skipped:
//! - disliked: permanent for the session
//! - seen: cleared on filter change or exhaustion
//!
//! ### Filters
//! Optional meal type, cuisine and city chosen by the user.
//!
//! ## Example Usage
//!
//! ```ignore
//! use preferences::{ExclusionSets, Feedback, PreferenceModel, RecommendationFilters};
//!
//! let mut model = PreferenceModel::new();
//! model.record_feedback(&recipe, Feedback::Like);
//!
//! let mut exclusions = ExclusionSets::new();
//! exclusions.mark_seen(recipe.id.clone());
//!
//! let filters = RecommendationFilters::new().with_meal_type("dinner");
//! ```

// Public modules
pub mod exclusions;
pub mod filters;
pub mod model;

// Re-export commonly used types
pub use exclusions::ExclusionSets;
pub use filters::{FilterKey, RecommendationFilters};
pub use model::{Feedback, PreferenceModel, LIKE_CUISINE_BOOST, LIKE_TAG_BOOST};
