//! # Nutrition Recommender
//!
//! Turns one request into one recommendation:
//! 1. Build the request context (user id, dietary switches, goal text)
//! 2. Filter the food table by the dietary switches
//! 3. Pick one food per meal type
//! 4. Describe the goal, or fall back to the default description
//! 5. Attach the fixed advisory text
//!
//! Nothing here can fail. Missing inputs skip their step, and filters that
//! remove every candidate for a meal simply leave that meal out.

use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use food_data::FoodTable;
use goal_describer::{GoalDescriber, KeywordGoalDescriber};
use pipeline::{FilterPipeline, MealPlanEntry, MealPlanner};
use profile::{
    build_context, DietaryPreferences, RecommendationContext, RecommendationRequest, UserProfile,
};

/// Used when the request carries no goal text
pub const DEFAULT_GOAL_DESCRIPTION: &str = "Maintain a balanced diet to support general health.";

pub const MACRONUTRIENT_NOTES: &str =
    "Aim for roughly 30% protein, 40% carbohydrates and 30% fat across the day.";

pub const TIPS: &str = "Stay hydrated and incorporate regular exercise.";

/// The response body of a recommendation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecommendation {
    pub meal_plan: Vec<MealPlanEntry>,
    pub nutrition_goal_description: String,
    pub macronutrient_distribution_notes: String,
    pub tips: String,
}

/// Stateless recommender over a shared, read-only food table.
///
/// Cheap to clone; every field is shared. Safe to call from many request
/// handlers at once since nothing it holds is ever mutated.
#[derive(Clone)]
pub struct NutritionRecommender {
    food_table: Arc<FoodTable>,
    filter_pipeline: Arc<FilterPipeline>,
    meal_planner: MealPlanner,
    goal_describer: Arc<dyn GoalDescriber>,
}

impl NutritionRecommender {
    /// Recommender with the dietary filters and the keyword goal describer
    pub fn new(food_table: Arc<FoodTable>) -> Self {
        Self {
            food_table,
            filter_pipeline: Arc::new(FilterPipeline::with_dietary_filters()),
            meal_planner: MealPlanner::default(),
            goal_describer: Arc::new(KeywordGoalDescriber::new()),
        }
    }

    /// Swap the goal-description collaborator
    pub fn with_goal_describer(mut self, describer: impl GoalDescriber + 'static) -> Self {
        self.goal_describer = Arc::new(describer);
        self
    }

    pub fn food_table(&self) -> &FoodTable {
        &self.food_table
    }

    /// Generate a recommendation from loose inputs.
    ///
    /// `preferences` and `goal` are optional; absent values skip the
    /// corresponding step.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        user_profile: &UserProfile,
        preferences: Option<&DietaryPreferences>,
        goal: Option<&str>,
        rng: &mut R,
    ) -> NutritionRecommendation {
        let context = build_context(
            user_profile,
            preferences.copied().unwrap_or_default(),
            goal,
        );
        self.generate(&context, rng)
    }

    /// Generate a recommendation for a deserialized request body
    pub fn recommend_request<R: Rng + ?Sized>(
        &self,
        request: &RecommendationRequest,
        rng: &mut R,
    ) -> NutritionRecommendation {
        self.generate(&RecommendationContext::from(request), rng)
    }

    /// Generate a recommendation for an already-built context
    pub fn generate<R: Rng + ?Sized>(
        &self,
        context: &RecommendationContext,
        rng: &mut R,
    ) -> NutritionRecommendation {
        let start_time = Instant::now();

        info!(
            "Generating recommendations for user {} (preferences: {:?}, goal: {})",
            context.user_id,
            context.preferences.active(),
            context.goal.is_some()
        );

        let candidates = self
            .filter_pipeline
            .apply(self.food_table.all(), &context.preferences);
        let meal_plan = self.meal_planner.plan(&candidates, rng);

        let nutrition_goal_description = match &context.goal {
            Some(goal) => self.goal_describer.describe(goal),
            None => DEFAULT_GOAL_DESCRIPTION.to_string(),
        };

        info!(
            "Planned {} meals for user {} from {} candidates in {:.2?}",
            meal_plan.len(),
            context.user_id,
            candidates.len(),
            start_time.elapsed()
        );

        NutritionRecommendation {
            meal_plan,
            nutrition_goal_description,
            macronutrient_distribution_notes: MACRONUTRIENT_NOTES.to_string(),
            tips: TIPS.to_string(),
        }
    }
}
