//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::context::{Candidate, ScoringContext};

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared with the rayon scoring pass
/// - Filters take ownership of the Vec<Candidate> and return a filtered Vec
/// - Filters are infallible: a recommendation run never fails, it can only
///   come back empty
/// - Filters must keep the relative order of the candidates they retain
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - Filters, exclusions and preferences for this run
    fn apply(&self, candidates: Vec<Candidate>, context: &ScoringContext<'_>) -> Vec<Candidate>;
}
