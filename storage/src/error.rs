//! Storage error types.
//!
//! Used by the city repository and callers of the [`crate::CityDirectory`] API.
//! An unknown city is not an error; lookups return `None` / `false` for that.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Seed error: {0}")]
    Seed(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Seed(e.to_string())
    }
}
