//! Error types for the food-data crate.
//!
//! Only table construction can fail. Once a `FoodTable` exists every query
//! on it is infallible.

use thiserror::Error;

/// Errors that can occur while building or loading a food table
#[derive(Error, Debug)]
pub enum FoodDataError {
    /// I/O error occurred while reading a table file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a table file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had an invalid value
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        field: String,
        value: String,
        line: usize,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// Two items share the same name
    #[error("Duplicate food item: {0}")]
    DuplicateFood(String),

    /// A meal type name that isn't breakfast, lunch or dinner
    #[error("Unknown meal type: {0}")]
    UnknownMealType(String),

    /// Table-level validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FoodDataError>;
