//! FoodTable construction and indexing.
//!
//! Builds the name and tag indices once, validates the table, and hands
//! back an immutable `FoodTable`.

use crate::error::{FoodDataError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl FoodTable {
    /// The built-in six item table served by default.
    pub fn builtin() -> Self {
        let items = vec![
            FoodItem::new("oatmeal", 150.0, 5.0, 25.0, 3.0, &["breakfast", TAG_HEALTHY]),
            FoodItem::new(
                "grilled chicken salad",
                350.0,
                30.0,
                15.0,
                20.0,
                &["lunch", TAG_HEALTHY],
            ),
            FoodItem::new(
                "salmon with steamed vegetables",
                450.0,
                40.0,
                20.0,
                25.0,
                &["dinner", TAG_HIGH_PROTEIN],
            ),
            FoodItem::new(
                "beef steak",
                500.0,
                50.0,
                0.0,
                30.0,
                &["dinner", TAG_HIGH_PROTEIN, TAG_LOW_CARB],
            ),
            FoodItem::new("vegan curry", 300.0, 10.0, 40.0, 15.0, &["lunch", TAG_VEGAN]),
            FoodItem::new("fruit smoothie", 200.0, 8.0, 30.0, 5.0, &["breakfast", TAG_SNACK]),
        ];
        Self::index(items)
    }

    /// Build a table from an arbitrary item list.
    ///
    /// Item names must be unique. An empty list is allowed; it simply
    /// produces empty meal plans.
    pub fn from_items(items: Vec<FoodItem>) -> Result<Self> {
        let table = Self::index(items);
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a `::` delimited file (see `parser`).
    ///
    /// Unlike `from_items`, a file that yields no items is rejected.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading food table from {}", path.display());

        let items = parser::parse_food_file(path)?;
        if items.is_empty() {
            return Err(FoodDataError::ValidationError(format!(
                "{} contains no food items",
                path.display()
            )));
        }

        let table = Self::from_items(items)?;
        info!(
            "Loaded {} food items with {} distinct tags",
            table.len(),
            table.tag_index.len()
        );
        Ok(table)
    }

    fn index(items: Vec<FoodItem>) -> Self {
        let mut name_index = HashMap::with_capacity(items.len());
        let mut tag_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, item) in items.iter().enumerate() {
            // First occurrence wins; duplicates are reported by validate()
            name_index.entry(item.name.clone()).or_insert(idx);
            for tag in &item.tags {
                tag_index.entry(tag.clone()).or_default().push(idx);
            }
        }

        Self {
            items,
            name_index,
            tag_index,
        }
    }

    /// Check that every item name is unique
    pub fn validate(&self) -> Result<()> {
        if self.name_index.len() == self.items.len() {
            return Ok(());
        }
        let duplicate = self
            .items
            .iter()
            .enumerate()
            .find(|(idx, item)| self.name_index.get(&item.name) != Some(idx))
            .map(|(_, item)| item.name.clone())
            .unwrap_or_default();
        Err(FoodDataError::DuplicateFood(duplicate))
    }
}

impl Default for FoodTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_table_contents() {
        let table = FoodTable::builtin();
        assert_eq!(table.len(), 6);

        let steak = table.get("beef steak").unwrap();
        assert_eq!(steak.calories, 500.0);
        assert_eq!(steak.carbs_g, 0.0);
        assert!(steak.has_tag(TAG_LOW_CARB));
        assert!(steak.is_suitable_for(MealType::Dinner));

        // Only one vegan item, and it is a lunch
        let vegan = table.with_tag(TAG_VEGAN);
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].name, "vegan curry");
        assert!(vegan[0].is_suitable_for(MealType::Lunch));
    }

    #[test]
    fn test_builtin_covers_every_meal_type() {
        let table = FoodTable::builtin();
        for meal_type in MealType::ALL {
            assert!(!table.with_tag(meal_type.as_tag()).is_empty(), "{meal_type}");
        }
    }

    #[test]
    fn test_tag_index_preserves_table_order() {
        let table = FoodTable::builtin();
        let names: Vec<&str> = table
            .with_tag("dinner")
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["salmon with steamed vegetables", "beef steak"]);
        assert!(table.with_tag("dessert").is_empty());
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        let items = vec![
            FoodItem::new("toast", 120.0, 4.0, 20.0, 2.0, &["breakfast"]),
            FoodItem::new("soup", 180.0, 6.0, 20.0, 6.0, &["lunch"]),
            FoodItem::new("toast", 90.0, 3.0, 15.0, 1.0, &["snack"]),
        ];
        let err = FoodTable::from_items(items).unwrap_err();
        assert!(matches!(err, FoodDataError::DuplicateFood(ref name) if name == "toast"));
    }

    #[test]
    fn test_from_items_allows_empty_table() {
        let table = FoodTable::from_items(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.all().is_empty());
        assert!(table.tag_counts().is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let table = FoodTable::builtin();
        let counts = table.tag_counts();
        assert!(counts.contains(&("breakfast", 2)));
        assert!(counts.contains(&("high-protein", 2)));
        assert!(counts.contains(&("vegan", 1)));
        // Sorted by tag
        assert!(counts.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("food-table-{}.dat", std::process::id()));
        fs::write(
            &path,
            "# test table\n\
             porridge::180::6::30::4::breakfast|vegan\n\
             lentil soup::250::14::35::5::lunch|vegan\n",
        )
        .unwrap();

        let table = FoodTable::load_from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(table.len(), 2);
        assert_eq!(table.with_tag(TAG_VEGAN).len(), 2);
        assert!(table.get("porridge").is_some());
    }

    #[test]
    fn test_load_from_empty_file_fails() {
        let path = std::env::temp_dir().join(format!("food-table-empty-{}.dat", std::process::id()));
        fs::write(&path, "# nothing here\n").unwrap();

        let result = FoodTable::load_from_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(FoodDataError::ValidationError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = FoodTable::load_from_file(Path::new("/nonexistent/foods.dat"));
        assert!(matches!(result, Err(FoodDataError::IoError(_))));
    }
}
