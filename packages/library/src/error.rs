// ABOUTME: Error types for the library package
// ABOUTME: Covers storage, relationship validation, and enrichment failures

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    #[error("A resource cannot relate to itself")]
    SelfRelationship,

    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
