//! Request-side types: who is asking and what they want.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque user profile.
///
/// Only `user_id` is ever read, and only for logging. Every other field is
/// kept as-is so callers can send whatever their profile schema holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(pub Map<String, Value>);

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper, mostly for tests and the CLI
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The `user_id` field rendered as text, if it is a string or number
    pub fn user_id(&self) -> Option<String> {
        match self.0.get("user_id")? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Dietary switches that narrow the food table.
///
/// Deserializes from any JSON object. Only `vegan` and `low_carb` are
/// recognized, and a key counts as set only when its value is truthy.
/// Anything else, including values of unexpected types, reads as unset.
/// A JSON `null` reads as no preferences at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Map<String, Value>>")]
pub struct DietaryPreferences {
    pub vegan: bool,
    pub low_carb: bool,
}

impl DietaryPreferences {
    pub fn new(vegan: bool, low_carb: bool) -> Self {
        Self { vegan, low_carb }
    }

    /// Read preferences out of a loosely-typed map
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            vegan: map.get("vegan").is_some_and(is_truthy),
            low_carb: map.get("low_carb").is_some_and(is_truthy),
        }
    }

    /// True when no switch is set
    pub fn is_empty(&self) -> bool {
        !self.vegan && !self.low_carb
    }

    /// Names of the switches that are set, for logging
    pub fn active(&self) -> Vec<&'static str> {
        let mut active = Vec::new();
        if self.vegan {
            active.push("vegan");
        }
        if self.low_carb {
            active.push("low_carb");
        }
        active
    }
}

impl From<Option<Map<String, Value>>> for DietaryPreferences {
    fn from(map: Option<Map<String, Value>>) -> Self {
        map.map(|map| Self::from_map(&map)).unwrap_or_default()
    }
}

/// JSON truthiness: `false`, `null`, `0`, `""`, `[]` and `{}` are falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Body of a recommendation request.
///
/// `user_profile` is required; the other two fields may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub user_profile: UserProfile,
    #[serde(default)]
    pub dietary_preferences: DietaryPreferences,
    #[serde(default)]
    pub nutrition_goal_natural_language: Option<String>,
}
