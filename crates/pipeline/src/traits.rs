//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a set of candidate foods.

use food_data::FoodItem;
use profile::DietaryPreferences;

/// Core trait for filtering candidate foods.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across request handlers
/// - Candidates are borrowed rows of the shared `FoodTable`; a filter can
///   only drop references, never touch the rows themselves
/// - Filtering cannot fail. A filter that removes everything returns an
///   empty Vec
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership of the Vec)
    /// * `preferences` - The caller's dietary switches
    ///
    /// # Returns
    /// The candidates that pass, in their original order
    fn apply<'a>(
        &self,
        candidates: Vec<&'a FoodItem>,
        preferences: &DietaryPreferences,
    ) -> Vec<&'a FoodItem>;
}
