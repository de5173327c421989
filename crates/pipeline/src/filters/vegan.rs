//! Filter to keep only vegan foods.

use super::keep_tagged;
use crate::traits::Filter;
use food_data::{FoodItem, TAG_VEGAN};
use profile::DietaryPreferences;

/// Keeps only candidates tagged `vegan` when the vegan switch is set.
/// Passes everything through otherwise.
pub struct VeganFilter;

impl Filter for VeganFilter {
    fn name(&self) -> &str {
        "VeganFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a FoodItem>,
        preferences: &DietaryPreferences,
    ) -> Vec<&'a FoodItem> {
        if !preferences.vegan {
            return candidates;
        }
        keep_tagged(candidates, TAG_VEGAN)
    }
}
