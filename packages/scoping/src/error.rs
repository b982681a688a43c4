// ABOUTME: Error types for the scoping package
// ABOUTME: Defines all error variants for wizard and session operations

use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopingError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Vendor '{vendor}' is not a known {category} vendor")]
    UnknownVendor { vendor: String, category: String },

    #[error("No vendor selected")]
    NoVendorSelected,

    #[error("Satisfaction rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Wizard is not at the final step")]
    NotAtFinalStep,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ScopingError>;
