//! # Food Data Crate
//!
//! The food table every recommendation is drawn from.
//!
//! ## Main Components
//!
//! - **types**: `FoodItem`, `MealType`, `FoodTable`
//! - **index**: table construction (built-in table, item lists, files) and tag index
//! - **parser**: `::` delimited table files
//! - **error**: error types for table construction
//!
//! ## Example Usage
//!
//! ```ignore
//! use food_data::{FoodTable, MealType};
//!
//! let table = FoodTable::builtin();
//! let lunches = table.with_tag(MealType::Lunch.as_tag());
//! println!("{} lunch options", lunches.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{FoodDataError, Result};
pub use types::{
    FoodItem,
    FoodTable,
    MealType,
    TAG_HEALTHY,
    TAG_HIGH_PROTEIN,
    TAG_LOW_CARB,
    TAG_SNACK,
    TAG_VEGAN,
};
