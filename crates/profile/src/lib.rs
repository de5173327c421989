//! # Profile Crate
//!
//! Request-side types for nutrition recommendations.
//!
//! ## Components
//!
//! - `UserProfile`: opaque profile map; only `user_id` is read, for logging
//! - `DietaryPreferences`: the `vegan` / `low_carb` switches, parsed leniently
//! - `RecommendationRequest`: the JSON request body
//! - `RecommendationContext`: the normalized per-call view built from a request
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile::{RecommendationRequest, RecommendationContext};
//!
//! let request: RecommendationRequest = serde_json::from_str(body)?;
//! let context = RecommendationContext::from(&request);
//! ```

pub mod types;
pub mod user_context;

pub use types::{is_truthy, DietaryPreferences, RecommendationRequest, UserProfile};
pub use user_context::{build_context, RecommendationContext, ANONYMOUS_USER};
