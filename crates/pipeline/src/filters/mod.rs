//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod low_carb;
pub mod vegan;

pub use low_carb::LowCarbFilter;
pub use vegan::VeganFilter;

use food_data::FoodItem;

/// Keep only candidates carrying `tag`, preserving order
pub(crate) fn keep_tagged<'a>(candidates: Vec<&'a FoodItem>, tag: &str) -> Vec<&'a FoodItem> {
    candidates
        .into_iter()
        .filter(|food| food.has_tag(tag))
        .collect()
}
