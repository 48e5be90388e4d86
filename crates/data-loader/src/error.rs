//! Error types for the data-loader crate.
//!
//! Loading the recipe catalog is the only place in the system where a
//! failure is fatal, so every variant carries enough context to point the
//! operator at the offending file or record.

use crate::types::RecipeId;
use thiserror::Error;

/// Errors that can occur while loading and validating the recipe catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog JSON could not be decoded
    ///
    /// `line` and `column` come straight from serde_json and are 1-based.
    #[error("Parse error at line {line}, column {column} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// A recipe field had an invalid value
    #[error("Invalid value for {field} in recipe {recipe_id}: {value}")]
    InvalidValue {
        recipe_id: RecipeId,
        field: String,
        value: String,
    },

    /// Two catalog records share the same identifier
    #[error("Duplicate recipe id {id}")]
    DuplicateId { id: RecipeId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
