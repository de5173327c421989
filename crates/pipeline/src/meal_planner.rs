//! Meal selection over a filtered candidate set.
//!
//! For each meal type in order, pick one suitable food uniformly at random.
//! Meal types with no suitable candidate are skipped.

use food_data::{FoodItem, MealType};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// One line of a meal plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub meal_type: MealType,
    pub food_item: String,
}

/// Picks one food per meal type.
///
/// The random source is passed in per call, so callers decide between a
/// thread-local generator and a seeded one.
#[derive(Debug, Clone)]
pub struct MealPlanner {
    meal_types: Vec<MealType>,
}

impl MealPlanner {
    /// Plan the given meal types, in the given order
    pub fn new(meal_types: Vec<MealType>) -> Self {
        Self { meal_types }
    }

    pub fn meal_types(&self) -> &[MealType] {
        &self.meal_types
    }

    /// Build a plan from `candidates`.
    ///
    /// ## Algorithm
    /// For each meal type:
    /// 1. Collect candidates tagged with that meal type
    /// 2. If any, choose one uniformly at random and record it
    /// 3. Otherwise skip the meal type
    ///
    /// The result has at most one entry per meal type, in planner order.
    pub fn plan<R: Rng + ?Sized>(
        &self,
        candidates: &[&FoodItem],
        rng: &mut R,
    ) -> Vec<MealPlanEntry> {
        let mut plan = Vec::with_capacity(self.meal_types.len());

        for &meal_type in &self.meal_types {
            let options: Vec<&FoodItem> = candidates
                .iter()
                .copied()
                .filter(|food| food.is_suitable_for(meal_type))
                .collect();

            match options.choose(&mut *rng) {
                Some(food) => plan.push(MealPlanEntry {
                    meal_type,
                    food_item: food.name.clone(),
                }),
                None => tracing::debug!("No candidates for {}, skipping", meal_type),
            }
        }

        plan
    }
}

impl Default for MealPlanner {
    fn default() -> Self {
        Self::new(MealType::ALL.to_vec())
    }
}
