//! Filter to keep only low-carb foods.

use super::keep_tagged;
use crate::traits::Filter;
use food_data::{FoodItem, TAG_LOW_CARB};
use profile::DietaryPreferences;

/// Keeps only candidates tagged `low-carb` when the low_carb switch is set.
///
/// Works on the tag alone; the carbs_g column is not consulted.
pub struct LowCarbFilter;

impl Filter for LowCarbFilter {
    fn name(&self) -> &str {
        "LowCarbFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a FoodItem>,
        preferences: &DietaryPreferences,
    ) -> Vec<&'a FoodItem> {
        if !preferences.low_carb {
            return candidates;
        }
        keep_tagged(candidates, TAG_LOW_CARB)
    }
}
