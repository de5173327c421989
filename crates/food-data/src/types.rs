//! Core domain types for the food table.
//!
//! A `FoodTable` is built once and then only ever borrowed. Every query
//! returns references into it, so filtering can narrow a candidate set
//! without copying or mutating the shared rows.

use crate::error::FoodDataError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Tags
// =============================================================================

pub const TAG_VEGAN: &str = "vegan";
pub const TAG_LOW_CARB: &str = "low-carb";
pub const TAG_HIGH_PROTEIN: &str = "high-protein";
pub const TAG_HEALTHY: &str = "healthy";
pub const TAG_SNACK: &str = "snack";

// =============================================================================
// Meal types
// =============================================================================

/// One of the three meals a plan is built around.
///
/// The derived ordering follows the order meals are eaten in a day, which
/// is also the order entries appear in a meal plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in plan order
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    /// The tag that marks a food as suitable for this meal
    pub fn as_tag(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for MealType {
    type Err = FoodDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(FoodDataError::UnknownMealType(other.to_string())),
        }
    }
}

// =============================================================================
// Food items
// =============================================================================

/// A single row of the food table.
///
/// Tags are free text. Some mark meal suitability (`breakfast`, `lunch`,
/// `dinner`), the rest dietary categories (`vegan`, `low-carb`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f32,
    pub protein_g: f32,
    pub carbs_g: f32,
    pub fat_g: f32,
    /// Sorted so listings and serialized output are stable
    pub tags: BTreeSet<String>,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        calories: f32,
        protein_g: f32,
        carbs_g: f32,
        fat_g: f32,
        tags: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            tags: tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_suitable_for(&self, meal_type: MealType) -> bool {
        self.has_tag(meal_type.as_tag())
    }
}

// =============================================================================
// FoodTable - the read-only in-memory table
// =============================================================================

/// Immutable table of food items with a tag index.
///
/// Construction goes through `builtin`, `from_items` or `load_from_file`
/// (see `index.rs`). There are no mutators after that point; share it
/// behind an `Arc` and borrow from it.
#[derive(Debug, Clone)]
pub struct FoodTable {
    pub(crate) items: Vec<FoodItem>,
    /// Item name -> position in `items`
    pub(crate) name_index: HashMap<String, usize>,
    /// Tag -> positions in `items`, in table order
    pub(crate) tag_index: HashMap<String, Vec<usize>>,
}

impl FoodTable {
    /// All items in table order
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Borrowed view over every item, the starting point for filtering
    pub fn all(&self) -> Vec<&FoodItem> {
        self.items.iter().collect()
    }

    /// Look up an item by exact name
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        self.name_index.get(name).map(|&idx| &self.items[idx])
    }

    /// All items carrying `tag`, in table order
    pub fn with_tag(&self, tag: &str) -> Vec<&FoodItem> {
        self.tag_index
            .get(tag)
            .map(|positions| positions.iter().map(|&idx| &self.items[idx]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items per tag, sorted by tag
    pub fn tag_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .tag_index
            .iter()
            .map(|(tag, positions)| (tag.as_str(), positions.len()))
            .collect();
        counts.sort_unstable_by(|a, b| a.0.cmp(b.0));
        counts
    }
}
