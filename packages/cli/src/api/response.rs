// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use nacscope_core::ValidationError;
use nacscope_library::LibraryError;
use nacscope_projects::ProjectError;
use nacscope_scoping::storage::StorageError;
use nacscope_scoping::ScopingError;
use serde::Serialize;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Errors a handler can surface, mapped onto HTTP statuses
#[derive(Debug)]
pub enum ApiError {
    Storage(StorageError),
    Scoping(ScopingError),
    Library(LibraryError),
    Project(ProjectError),
    Validation(Vec<ValidationError>),
    NotFound(String),
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Storage(e)
    }
}

impl From<ScopingError> for ApiError {
    fn from(e: ScopingError) -> Self {
        ApiError::Scoping(e)
    }
}

impl From<LibraryError> for ApiError {
    fn from(e: LibraryError) -> Self {
        ApiError::Library(e)
    }
}

impl From<ProjectError> for ApiError {
    fn from(e: ProjectError) -> Self {
        ApiError::Project(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ApiError::Storage(StorageError::NotFound) => {
                (StatusCode::NOT_FOUND, "Session not found".to_string())
            }
            ApiError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ApiError::Scoping(ScopingError::SessionNotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Session not found: {}", id))
            }
            ApiError::Scoping(ScopingError::NotAtFinalStep) => (
                StatusCode::CONFLICT,
                ScopingError::NotAtFinalStep.to_string(),
            ),
            ApiError::Scoping(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::Library(LibraryError::ResourceNotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Resource not found: {}", id))
            }
            ApiError::Library(LibraryError::TagNotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Tag not found: {}", id))
            }
            ApiError::Library(LibraryError::RelationshipNotFound(id)) => (
                StatusCode::NOT_FOUND,
                format!("Relationship not found: {}", id),
            ),
            ApiError::Library(LibraryError::SelfRelationship) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                LibraryError::SelfRelationship.to_string(),
            ),
            ApiError::Library(LibraryError::InvalidInput(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            ApiError::Library(LibraryError::InvalidUrl(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            ApiError::Library(LibraryError::Fetch { url, reason }) => (
                StatusCode::BAD_GATEWAY,
                format!("Fetch failed for {}: {}", url, reason),
            ),
            ApiError::Library(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ApiError::Project(ProjectError::NotFound(id)) => {
                (StatusCode::NOT_FOUND, format!("Project not found: {}", id))
            }
            ApiError::Project(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ApiError::Validation(errors) => {
                let message = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join("; ");
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, what.clone()),
        };

        (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
    }
}
