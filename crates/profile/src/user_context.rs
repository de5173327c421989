//! Build a RecommendationContext from an incoming request
//!
//! The context is the normalized view the recommender works from: a
//! printable user id, the dietary switches, and the goal text if there is
//! any real text to describe.

use tracing::debug;

use crate::types::{DietaryPreferences, RecommendationRequest, UserProfile};

/// Label used when the profile carries no usable `user_id`
pub const ANONYMOUS_USER: &str = "anonymous";

/// Everything a single recommendation call needs to know about the user
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationContext {
    pub user_id: String,
    pub preferences: DietaryPreferences,
    /// Trimmed goal text; `None` when absent or blank
    pub goal: Option<String>,
}

impl RecommendationContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            preferences: DietaryPreferences::default(),
            goal: None,
        }
    }

    pub fn with_preferences(mut self, preferences: DietaryPreferences) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = normalize_goal(Some(goal.into()));
        self
    }
}

/// Build the context for one request. Never fails.
pub fn build_context(
    profile: &UserProfile,
    preferences: DietaryPreferences,
    goal: Option<&str>,
) -> RecommendationContext {
    let user_id = profile.user_id().unwrap_or_else(|| {
        debug!("Profile has no usable user_id, using {}", ANONYMOUS_USER);
        ANONYMOUS_USER.to_string()
    });

    RecommendationContext {
        user_id,
        preferences,
        goal: normalize_goal(goal.map(str::to_string)),
    }
}

impl From<&RecommendationRequest> for RecommendationContext {
    fn from(request: &RecommendationRequest) -> Self {
        build_context(
            &request.user_profile,
            request.dietary_preferences,
            request.nutrition_goal_natural_language.as_deref(),
        )
    }
}

fn normalize_goal(goal: Option<String>) -> Option<String> {
    goal.map(|g| g.trim().to_string()).filter(|g| !g.is_empty())
}
