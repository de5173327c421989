//! Parser for food table files.
//!
//! Format, one item per line:
//! `name::calories::protein_g::carbs_g::fat_g::tag1|tag2|...`
//!
//! Blank lines and lines starting with `#` are skipped. Tags are trimmed
//! and lowercased; empty tags are dropped.

use crate::error::{FoodDataError, Result};
use crate::types::FoodItem;
use std::fs;
use std::path::Path;

const FIELD_COUNT: usize = 6;

/// Read and parse a table file
pub fn parse_food_file(path: &Path) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_foods(&content, &file)
}

/// Parse table content. `file` is only used in error messages.
pub fn parse_foods(content: &str, file: &str) -> Result<Vec<FoodItem>> {
    let mut items = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }
        items.push(parse_food_line(line_trimmed, file, line_no)?);
    }

    Ok(items)
}

fn parse_food_line(line: &str, file: &str, line_no: usize) -> Result<FoodItem> {
    let parts: Vec<&str> = line.split("::").collect();
    if parts.len() != FIELD_COUNT {
        return Err(FoodDataError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let name = parts[0].trim();
    if name.is_empty() {
        return Err(FoodDataError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Missing food name".to_string(),
        });
    }

    let calories = parse_amount("calories", parts[1], line_no)?;
    let protein_g = parse_amount("protein_g", parts[2], line_no)?;
    let carbs_g = parse_amount("carbs_g", parts[3], line_no)?;
    let fat_g = parse_amount("fat_g", parts[4], line_no)?;

    let tags = parts[5]
        .split('|')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();

    Ok(FoodItem {
        name: name.to_string(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        tags,
    })
}

/// Nutrient amounts must be finite and non-negative
fn parse_amount(field: &str, raw: &str, line_no: usize) -> Result<f32> {
    let invalid = || FoodDataError::InvalidValue {
        field: field.to_string(),
        value: raw.trim().to_string(),
        line: line_no,
    };
    let value: f32 = raw.trim().parse().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_line() {
        let items = parse_foods("tofu bowl::320::18::35::12::Lunch|vegan| ", "foods.dat").unwrap();

        assert_eq!(items.len(), 1);
        let tofu = &items[0];
        assert_eq!(tofu.name, "tofu bowl");
        assert_eq!(tofu.calories, 320.0);
        assert_eq!(tofu.fat_g, 12.0);
        assert!(tofu.has_tag("lunch"));
        assert!(tofu.has_tag("vegan"));
        assert_eq!(tofu.tags.len(), 2);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let content = "# name::kcal::protein::carbs::fat::tags\n\n\
                       oatmeal::150::5::25::3::breakfast|healthy\n   \n";
        let items = parse_foods(content, "foods.dat").unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "oatmeal");
    }

    #[test]
    fn test_field_count_mismatch_reports_line() {
        let content = "oatmeal::150::5::25::3::breakfast\nbroken::1::2\n";
        let err = parse_foods(content, "foods.dat").unwrap_err();
        match err {
            FoodDataError::FieldCountMismatch { expected, found, line } => {
                assert_eq!(expected, 6);
                assert_eq!(found, 3);
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_amount() {
        let err = parse_foods("oatmeal::lots::5::25::3::breakfast", "foods.dat").unwrap_err();
        assert!(matches!(
            err,
            FoodDataError::InvalidValue { ref field, line: 1, .. } if field == "calories"
        ));

        let err = parse_foods("oatmeal::150::-5::25::3::breakfast", "foods.dat").unwrap_err();
        assert!(matches!(err, FoodDataError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_name() {
        let err = parse_foods(" ::150::5::25::3::breakfast", "foods.dat").unwrap_err();
        assert!(err.to_string().contains("foods.dat"));
    }
}
