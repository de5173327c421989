//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{LowCarbFilter, VeganFilter};
use crate::traits::Filter;
use food_data::FoodItem;
use profile::DietaryPreferences;

/// Chains multiple filters together into a processing pipeline.
///
/// Filters compose with AND semantics: a food survives only if every
/// filter keeps it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(VeganFilter)
///     .add_filter(LowCarbFilter);
///
/// let filtered = pipeline.apply(table.all(), &preferences);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard dietary pipeline: vegan, then low-carb.
    pub fn with_dietary_filters() -> Self {
        Self::new().add_filter(VeganFilter).add_filter(LowCarbFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// ## Algorithm
    /// 1. Start with the input candidates
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply<'a>(
        &self,
        candidates: Vec<&'a FoodItem>,
        preferences: &DietaryPreferences,
    ) -> Vec<&'a FoodItem> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, preferences);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use food_data::FoodTable;

    #[test]
    fn test_empty_pipeline() {
        let table = FoodTable::builtin();
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let filtered = pipeline.apply(table.all(), &DietaryPreferences::new(true, true));
        assert_eq!(filtered.len(), 6);
    }

    #[test]
    fn test_single_filter() {
        let table = FoodTable::builtin();
        let pipeline = FilterPipeline::new().add_filter(VeganFilter);

        let filtered = pipeline.apply(table.all(), &DietaryPreferences::new(true, false));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "vegan curry");
    }

    #[test]
    fn test_dietary_filters_compose_with_and() {
        let table = FoodTable::builtin();
        let pipeline = FilterPipeline::with_dietary_filters();
        assert_eq!(pipeline.filter_names(), vec!["VeganFilter", "LowCarbFilter"]);

        let low_carb = pipeline.apply(table.all(), &DietaryPreferences::new(false, true));
        assert_eq!(low_carb.len(), 1);
        assert_eq!(low_carb[0].name, "beef steak");

        // Nothing in the built-in table is both vegan and low-carb
        let both = pipeline.apply(table.all(), &DietaryPreferences::new(true, true));
        assert!(both.is_empty());
    }

    #[test]
    fn test_no_preferences_keeps_everything() {
        let table = FoodTable::builtin();
        let pipeline = FilterPipeline::with_dietary_filters();
        let filtered = pipeline.apply(table.all(), &DietaryPreferences::default());
        assert_eq!(filtered.len(), table.len());
    }
}
