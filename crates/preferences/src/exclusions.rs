//! Recipes that must not be recommended right now.
//!
//! Two sets with different lifetimes:
//! - `disliked` only grows; a disliked recipe never comes back this session.
//! - `seen` grows by one per suggestion and is cleared whenever the
//!   meal-type/cuisine filter changes or every candidate has been shown.

use data_loader::RecipeId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSets {
    disliked: HashSet<RecipeId>,
    seen: HashSet<RecipeId>,
}

impl ExclusionSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permanently exclude a recipe. Returns false if it was already disliked.
    pub fn mark_disliked(&mut self, id: RecipeId) -> bool {
        self.disliked.insert(id)
    }

    /// Exclude a recipe until the next seen reset
    pub fn mark_seen(&mut self, id: RecipeId) {
        self.seen.insert(id);
    }

    /// Forget every seen recipe; dislikes are kept
    pub fn reset_seen(&mut self) {
        self.seen.clear();
    }

    pub fn is_disliked(&self, id: &RecipeId) -> bool {
        self.disliked.contains(id)
    }

    pub fn is_seen(&self, id: &RecipeId) -> bool {
        self.seen.contains(id)
    }

    pub fn disliked(&self) -> &HashSet<RecipeId> {
        &self.disliked
    }

    pub fn seen(&self) -> &HashSet<RecipeId> {
        &self.seen
    }

    /// disliked ∪ seen, the set the scorer skips
    pub fn excluded(&self) -> HashSet<RecipeId> {
        self.disliked.union(&self.seen).cloned().collect()
    }
}
