//! Server crate for the NutriRecs recommendation service.
//!
//! This crate contains the recommender that ties the food table, the
//! filter pipeline and the goal describer together, plus the HTTP routes
//! and configuration for serving it.

pub mod config;
pub mod recommender;
pub mod routes;

pub use config::{load_food_table, ServerConfig};
pub use recommender::{NutritionRecommendation, NutritionRecommender};
pub use routes::router;
