//! Pipeline for filtering the food table and picking meals.
//!
//! This crate provides:
//! - Filter trait and implementations for dietary filtering
//! - FilterPipeline for composing filters
//! - MealPlanner for picking one food per meal type
//!
//! ## Architecture
//! A recommendation runs in two stages:
//! 1. Filters narrow the table to foods matching the dietary switches
//! 2. MealPlanner picks one remaining food per meal type at random
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, MealPlanner};
//!
//! let pipeline = FilterPipeline::with_dietary_filters();
//! let candidates = pipeline.apply(table.all(), &preferences);
//!
//! let plan = MealPlanner::default().plan(&candidates, &mut rand::rng());
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod meal_planner;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use meal_planner::{MealPlanEntry, MealPlanner};
