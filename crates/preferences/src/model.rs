//! Learned taste profile for a session.
//!
//! The model is additive and only ever grows: liking a recipe boosts its
//! cuisine by 2 and each of its tags by 1. Disliking changes nothing here;
//! a dislike removes the recipe from consideration through the exclusion
//! sets instead.

use data_loader::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Affinity added to a liked recipe's cuisine
pub const LIKE_CUISINE_BOOST: u32 = 2;

/// Affinity added to each tag of a liked recipe
pub const LIKE_TAG_BOOST: u32 = 1;

/// User reaction to a shown recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feedback {
    Like,
    Dislike,
}

/// Per-cuisine and per-tag affinity scores.
///
/// Unseen keys read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceModel {
    pub cuisine: HashMap<String, u32>,
    pub tags: HashMap<String, u32>,
}

impl PreferenceModel {
    /// Create an empty model (every affinity is 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Affinity for a cuisine, 0 if never liked
    pub fn cuisine_score(&self, cuisine: &str) -> u32 {
        self.cuisine.get(cuisine).copied().unwrap_or(0)
    }

    /// Affinity for a single tag, 0 if never liked
    pub fn tag_score(&self, tag: &str) -> u32 {
        self.tags.get(tag).copied().unwrap_or(0)
    }

    /// Sum of tag affinities over a list of tags
    pub fn tags_score<S: AsRef<str>>(&self, tags: &[S]) -> u32 {
        tags.iter()
            .map(|t| self.tag_score(t.as_ref()))
            .fold(0, u32::saturating_add)
    }

    pub fn is_empty(&self) -> bool {
        self.cuisine.is_empty() && self.tags.is_empty()
    }

    /// Fold one piece of feedback into the model.
    ///
    /// Only `Like` changes scores.
    pub fn record_feedback(&mut self, recipe: &Recipe, feedback: Feedback) {
        match feedback {
            Feedback::Like => self.record_like(recipe),
            Feedback::Dislike => {
                debug!("Dislike for recipe {} leaves preferences unchanged", recipe.id);
            }
        }
    }

    fn record_like(&mut self, recipe: &Recipe) {
        let cuisine = self.cuisine.entry(recipe.cuisine.clone()).or_insert(0);
        *cuisine = cuisine.saturating_add(LIKE_CUISINE_BOOST);

        for tag in &recipe.tags {
            let score = self.tags.entry(tag.clone()).or_insert(0);
            *score = score.saturating_add(LIKE_TAG_BOOST);
        }

        debug!(
            "Recorded like for recipe {} (cuisine {} now {})",
            recipe.id,
            recipe.cuisine,
            self.cuisine_score(&recipe.cuisine)
        );
    }
}
