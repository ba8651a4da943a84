//! Render error types.

use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A city name did not resolve in the directory.
    #[error("City not found: {0}")]
    NotFound(String),

    #[error("Invalid marker color: {0}")]
    InvalidColor(String),

    #[error("Invalid render request: {0}")]
    InvalidRequest(String),

    #[error("Canvas error: {0}")]
    Canvas(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Basemap error: {0}")]
    Basemap(String),

    #[error("Font error: {0}")]
    Font(String),

    #[error("Directory error: {0}")]
    Directory(#[from] StorageError),

    #[error("Render worker failed: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;
