//! Goal description for free-text nutrition goals.
//!
//! The recommender never interprets goal text itself. It hands the text to
//! a `GoalDescriber` and places whatever comes back into the response.
//! This crate provides:
//! - the `GoalDescriber` trait
//! - `KeywordGoalDescriber`, the default keyword-matching implementation
//! - `FixedGoalDescriber`, which always answers with the same text

pub mod extract;

use std::sync::Arc;
use tracing::debug;

pub use extract::{extract_goal, DurationUnit, GoalDuration, GoalSummary, WeightDirection};

/// Turns a free-text goal into a human-readable summary.
///
/// Implementations must not fail; when nothing can be made of the text
/// they return a best-effort generic summary.
pub trait GoalDescriber: Send + Sync {
    fn describe(&self, goal_text: &str) -> String;
}

impl<T: GoalDescriber + ?Sized> GoalDescriber for Arc<T> {
    fn describe(&self, goal_text: &str) -> String {
        (**self).describe(goal_text)
    }
}

impl<T: GoalDescriber + ?Sized> GoalDescriber for Box<T> {
    fn describe(&self, goal_text: &str) -> String {
        (**self).describe(goal_text)
    }
}

/// Daily macro targets quoted alongside a goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroTargets {
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

/// Placeholder targets; nothing here is computed from the user
pub const PLACEHOLDER_TARGETS: MacroTargets = MacroTargets {
    calories: 2000,
    protein_g: 150,
    carbs_g: 200,
    fat_g: 65,
};

impl MacroTargets {
    pub fn sentence(&self) -> String {
        format!(
            "Suggested daily targets: {} kcal, {} g protein, {} g carbohydrates, {} g fat.",
            self.calories, self.protein_g, self.carbs_g, self.fat_g
        )
    }
}

/// Keyword-matching describer.
///
/// Reads weight change, time frame and muscle-gain intent out of the text
/// (see `extract`) and appends fixed macro targets.
#[derive(Debug, Clone)]
pub struct KeywordGoalDescriber {
    targets: MacroTargets,
}

impl KeywordGoalDescriber {
    pub fn new() -> Self {
        Self {
            targets: PLACEHOLDER_TARGETS,
        }
    }

    /// Quote different macro targets
    pub fn with_targets(targets: MacroTargets) -> Self {
        Self { targets }
    }
}

impl Default for KeywordGoalDescriber {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalDescriber for KeywordGoalDescriber {
    fn describe(&self, goal_text: &str) -> String {
        let summary = extract_goal(goal_text);
        debug!("Extracted goal summary: {:?}", summary);

        let headline = summary
            .sentence()
            .unwrap_or_else(|| {
                let text = goal_text.trim().trim_end_matches('.');
                format!("General nutrition goal: {}.", text)
            });
        format!("{} {}", headline, self.targets.sentence())
    }
}

/// Describer that ignores its input
#[derive(Debug, Clone, PartialEq)]
pub struct FixedGoalDescriber(pub String);

impl FixedGoalDescriber {
    pub fn new(description: impl Into<String>) -> Self {
        Self(description.into())
    }
}

impl GoalDescriber for FixedGoalDescriber {
    fn describe(&self, _goal_text: &str) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_describer_full_goal() {
        let describer = KeywordGoalDescriber::new();
        let description = describer.describe("Tôi muốn giảm 5kg trong 2 tháng và tăng cơ bắp.");
        assert_eq!(
            description,
            "Lose 5 kg over 2 months and build muscle. \
             Suggested daily targets: 2000 kcal, 150 g protein, 200 g carbohydrates, 65 g fat."
        );
    }

    #[test]
    fn test_keyword_describer_unrecognized_goal() {
        let describer = KeywordGoalDescriber::new();
        let description = describer.describe("  eat more greens ");
        assert!(description.starts_with("General nutrition goal: eat more greens. "));
        assert!(description.ends_with(&PLACEHOLDER_TARGETS.sentence()));

        let description = describer.describe("Eat more greens.");
        assert!(description.starts_with("General nutrition goal: Eat more greens. Suggested"));
    }

    #[test]
    fn test_keyword_inside_other_word_is_ignored() {
        let describer = KeywordGoalDescriber::new();
        let description = describer.describe("I want to get close to my ideal body");
        assert!(description.starts_with("General nutrition goal: I want to get close to my ideal body."));
    }

    #[test]
    fn test_custom_targets() {
        let describer = KeywordGoalDescriber::with_targets(MacroTargets {
            calories: 1800,
            protein_g: 120,
            carbs_g: 180,
            fat_g: 60,
        });
        assert!(describer.describe("lose weight").contains("1800 kcal"));
    }

    #[test]
    fn test_fixed_describer() {
        let describer = FixedGoalDescriber::new("fixed");
        assert_eq!(describer.describe("anything at all"), "fixed");
    }

    #[test]
    fn test_describer_behind_pointers() {
        let shared: Arc<dyn GoalDescriber> = Arc::new(FixedGoalDescriber::new("shared"));
        assert_eq!(shared.describe("x"), "shared");

        let boxed: Box<dyn GoalDescriber> = Box::new(KeywordGoalDescriber::new());
        assert!(boxed.describe("bulk up").starts_with("Build muscle."));
    }
}
